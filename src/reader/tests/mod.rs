//! Test fixtures for the TableBuilder reader
//!
//! Each fixture is a complete export cut into header, body and footer text,
//! together with the row headers, flattened column labels and column
//! dimensions the parser is expected to resolve from it.


/// One export cut at its metadata boundaries
pub struct TestCase {
    pub header: &'static str,
    pub body: &'static str,
    pub footer: &'static str,
    pub row_headers: &'static [&'static str],
    /// Column labels joined with "_"
    pub col_headers: &'static [&'static str],
    pub column_dimensions: &'static [&'static str],
}

impl TestCase {
    pub fn full_document(&self) -> String {
        format!("{}{}{}", self.header, self.body, self.footer)
    }
}

pub const FOOTER_2016: &str = r#""Data Source: Census of Population and Housing, 2016, TableBuilder"

"INFO","Cells in this table have been randomly adjusted to avoid the release of confidential data. No reliance should be placed on small cells."


"Copyright Commonwealth of Australia, 2018, see abs.gov.au/copyright"
"ABS data licensed under Creative Commons, see abs.gov.au/ccby"
"#;

pub const FOOTER_2021: &str = r#"

"Data source: Census of Population and Housing, 2021, TableBuilder"

"INFO","Cells in this table have been randomly adjusted to avoid the release of confidential data. No reliance should be placed on small cells."


"Copyright Commonwealth of Australia, 2022, see abs.gov.au/copyright"
"ABS data licensed under Creative Commons, see abs.gov.au/ccby"
"#;

pub const FOOTER_DATASET_VARIANT: &str = r#"

"Dataset: Census of Population and Housing, 2016, TableBuilder"

"INFO","Cells in this table have been randomly adjusted to avoid the release of confidential data. No reliance should be placed on small cells."


"Copyright Commonwealth of Australia, 2018, see abs.gov.au/copyright"
"ABS data licensed under Creative Commons, see abs.gov.au/ccby"
"#;

pub const MULTILEVEL_ROWS_HEADER: &str = r#"Australian Bureau of Statistics

"2016 Census - Counting Persons, Place of Usual Residence (MB)"
"SEXP Sex, INCP Total Personal Income (weekly) and AGE10P - Age in Ten Year Groups by Australia (UR)"
"Counting: Persons Place of Usual Residence"

Filters:
"Default Summation","Persons Place of Usual Residence"

"#;

pub const MULTILEVEL_ROWS_BODY: &str = r#"
,,"Australia (UR)","Australia","Total",
"SEXP Sex","INCP Total Personal Income (weekly)","AGE10P - Age in Ten Year Groups",
"Male","Negative income","0-9 years",999,999,
,,"10-19 years",999,999,
,,"20-29 years",999,999,
,,"30-39 years",999,999,
,,"80-89 years",999,999,
,,"90-99 years",999,999,
,,"100 years and over",999,999,
"#;

pub const MULTILEVEL_ROWS: TestCase = TestCase {
    header: MULTILEVEL_ROWS_HEADER,
    body: MULTILEVEL_ROWS_BODY,
    footer: FOOTER_2016,
    row_headers: &[
        "SEXP Sex",
        "INCP Total Personal Income (weekly)",
        "AGE10P - Age in Ten Year Groups",
    ],
    col_headers: &["Australia", "Total"],
    column_dimensions: &["Australia (UR)"],
};

pub const MULTILEVEL_ROWS2: TestCase = TestCase {
    header: r#"Australian Bureau of Statistics

"2016 Census - Counting Persons, Place of Usual Residence (MB)"
"INCP Total Personal Income (weekly) and TYPP Type of Educational Institution Attending by Australia (UR)"
"Counting: Persons Place of Usual Residence"

Filters:
"Default Summation","Persons Place of Usual Residence"

"#,
    body: r#"
,"Australia (UR)","Australia","Total",
"INCP Total Personal Income (weekly)","TYPP Type of Educational Institution Attending",
"Negative income","Preschool",0,0,
,"Infants/Primary - Government",0,0,
,"Infants/Primary - Catholic",0,0,
,"Infants/Primary - Other Non Government",0,0,
,"University or other Tertiary Institution",0,0,
,"Other",15544,15544,
,"Not stated",272728,272728,
,"Not applicable",1143291,1143291,
"#,
    footer: FOOTER_2016,
    row_headers: &[
        "INCP Total Personal Income (weekly)",
        "TYPP Type of Educational Institution Attending",
    ],
    col_headers: &["Australia", "Total"],
    column_dimensions: &["Australia (UR)"],
};

/// One spatial row dimension by one attribute column dimension, with a
/// "Total" row and no "Total" column. The footer carries an extra trailing
/// blank line.
pub const SPATIAL_X_ATTR: TestCase = TestCase {
    header: r#"Australian Bureau of Statistics

"2016 Census - Counting Employed Persons, Place of Work (POW)"
"DZN (POW) by OCCP - 3 Digit Level"
"Counting: Persons Aged 15 Years and Over Place of Work"

Filters:
"Default Summation","Persons Aged 15 Years and Over Place of Work"

"#,
    body: r#"
"OCCP - 3 Digit Level","Managers, nfd","Chief Executives, General Managers and Legislators","Farmers and Farm Managers","Specialist Managers, nfd",
"DZN (POW)",
"110078098",0,0,40,0,
"110078099",3,0,74,0,
"POW not applicable",0,0,0,0,
"Total",36635,113275,141419,24196,
"#,
    footer: r#"

"Data Source: Census of Population and Housing, 2016, TableBuilder"

"INFO","Cells in this table have been randomly adjusted to avoid the release of confidential data. No reliance should be placed on small cells."


"Copyright Commonwealth of Australia, 2018, see abs.gov.au/copyright"
"ABS data licensed under Creative Commons, see abs.gov.au/ccby"

"#,
    row_headers: &["DZN (POW)"],
    col_headers: &[
        "Managers, nfd",
        "Chief Executives, General Managers and Legislators",
        "Farmers and Farm Managers",
        "Specialist Managers, nfd",
    ],
    column_dimensions: &["OCCP - 3 Digit Level"],
};

/// Origin/destination: place of work by place of usual residence
pub const OD_DATA: TestCase = TestCase {
    header: r#"Australian Bureau of Statistics

"2016 Census - Counting Employed Persons, Place of Work (POW)"
"OCCP - 1 Digit Level by SA2 (POW) by SA2 (UR)"
"Counting: Persons Aged 15 Years and Over Place of Work"

Filters:
"Default Summation","Persons Aged 15 Years and Over Place of Work"

"#,
    body: r#"
"SA2 (UR)","Alexandra Hills","Belmont - Gumdale","Birkdale","Capalaba","Thorneside",
"SA2 (POW)",
"Brisbane City",25,19,34,35,8,
"Fortitude Valley",5,4,11,18,3,
"Wynnum West - Hemmant",90,30,78,78,19,
"Total",2308,703,1777,2558,436,
"#,
    footer: r#"

"Data Source: Census of Population and Housing, 2016, TableBuilder"

"INFO","Cells in this table have been randomly adjusted to avoid the release of confidential data. No reliance should be placed on small cells."


"Copyright Commonwealth of Australia, 2018, see abs.gov.au/copyright"
"ABS data licensed under Creative Commons, see abs.gov.au/ccby"
"#,
    row_headers: &["SA2 (POW)"],
    col_headers: &[
        "Alexandra Hills",
        "Belmont - Gumdale",
        "Birkdale",
        "Capalaba",
        "Thorneside",
    ],
    column_dimensions: &["SA2 (UR)"],
};

pub const COL_MULTIINDEX_HEADER: &str = r#"Australian Bureau of Statistics

"2016 Census - Counting Employed Persons, Place of Work (POW)"
"ENGP Proficiency in Spoken English and HSCP Highest Year of School Completed by SA4 (UR) and SEXP Sex"
"Counting: Persons Aged 15 Years and Over Place of Work"

Filters:
"Default Summation","Persons Aged 15 Years and Over Place of Work"

"#;

/// Two-level rows (proficiency × schooling) by two-level columns
/// (region × sex), ragged in both header regions
pub const COL_MULTIINDEX: TestCase = TestCase {
    header: COL_MULTIINDEX_HEADER,
    body: r#"
,"SA4 (UR)","Central Coast",,"Sydney - Baulkham Hills and Hawkesbury",,"Sydney - Blacktown",,
,"SEXP Sex","Male","Female","Male","Female","Male","Female",
"ENGP Proficiency in Spoken English","HSCP Highest Year of School Completed",
"Very well","Year 12 or equivalent",3356,3913,14049,14364,28943,28644,
,"Year 11 or equivalent",282,250,684,615,1631,1552,
,"Year 10 or equivalent",852,926,1395,1512,3430,3290,
,"Year 9 or equivalent",203,233,421,416,826,799,
,"Year 8 or below",177,228,289,269,600,595,
,"Did not go to school",25,17,54,36,127,116,
,"Not stated",210,279,212,226,620,649,
,"Not applicable",0,0,0,0,0,0,
"Well","Year 12 or equivalent",1044,1417,4317,5328,10408,11153,
,"Year 11 or equivalent",60,79,131,160,586,503,
,"Not stated",10649,12210,4209,4674,9520,8994,
,"Not applicable",0,0,0,0,0,0,
"#,
    footer: r#"

"Data Source: Census of Population and Housing, 2016, TableBuilder"

"INFO","Cells in this table have been randomly adjusted to avoid the release of confidential data. No reliance should be placed on small cells."


"Copyright Commonwealth of Australia, 2018, see abs.gov.au/copyright"
"ABS data licensed under Creative Commons, see abs.gov.au/ccby"
"#,
    row_headers: &[
        "ENGP Proficiency in Spoken English",
        "HSCP Highest Year of School Completed",
    ],
    col_headers: &[
        "Central Coast_Male",
        "Central Coast_Female",
        "Sydney - Baulkham Hills and Hawkesbury_Male",
        "Sydney - Baulkham Hills and Hawkesbury_Female",
        "Sydney - Blacktown_Male",
        "Sydney - Blacktown_Female",
    ],
    column_dimensions: &["SA4 (UR)", "SEXP Sex"],
};

/// 2021 export with two active filters and the lower-case "Data source" footer
pub const FILTERS_2021: TestCase = TestCase {
    header: r#"Australian Bureau of Statistics

"2021 Census - counting persons, place of usual residence"
"OCCP Occupation by SEXP Sex"
"Counting: Persons Place of Usual Residence"

Filters:
"Default Summation","Persons Place of Usual Residence"
"STATE (UR)","Queensland"
"AGE10P Age in Ten Year Groups","40-49 years"

"#,
    body: r#"
"SEXP Sex","Male","Female","Total",
"OCCP Occupation",
"Managers",21184,13925,35109,
"Professionals",25517,39644,65161,
"Labourers",11207,6539,17746,
"Total",57908,60108,118016,
"#,
    footer: FOOTER_2021,
    row_headers: &["OCCP Occupation"],
    col_headers: &["Male", "Female", "Total"],
    column_dimensions: &["SEXP Sex"],
};

/// Meshblock codes (too large for i32) with "Total" on both axes
pub const INT_ROWS_AND_TOTALS: TestCase = TestCase {
    header: r#"Australian Bureau of Statistics

"2021 Census - counting persons, place of usual residence"
"MB by SEXP Sex"
"Counting: Persons Place of Usual Residence"

Filters:
"Default Summation","Persons Place of Usual Residence"

"#,
    body: r#"
"SEXP Sex","Male","Female","Total",
"MB",
"30562780000",12,15,27,
"30562790000",8,4,12,
"30562800000",0,3,3,
"Total",20,22,42,
"#,
    footer: FOOTER_2021,
    row_headers: &["MB"],
    col_headers: &["Male", "Female", "Total"],
    column_dimensions: &["SEXP Sex"],
};

pub const RAGGED_FFILL_BODY: &str = r#"
,"STATE","New South Wales","Victoria","Queensland","South Australia","Western Australia","Tasmania","Northern Territory","Australian Capital Territory","Other Territories","Total",
"SEXP Sex","FMGF - 1 Digit Level",
"Male","Couple family with grandchildren",20710,12307,14166,4066,7151,1435,1926,702,10,62463,
,"Lone grandparent",10617,6127,6351,2085,3369,671,1486,302,13,31019,
,"Not applicable",3692904,2892405,2362975,817562,1250871,244515,132578,196526,2853,11593188,
"Female","Couple family with grandchildren",19712,11688,13790,3723,7000,1364,1820,723,10,59827,
,"Lone grandparent",15730,9441,9534,3135,5042,961,1827,462,13,46152,
,"Not applicable",3805273,3014087,2437722,844224,1244420,255233,119476,201935,2410,11924766,
"Total","Couple family with grandchildren",40422,23999,27950,7780,14154,2793,3742,1423,21,122290,
,"Lone grandparent",26351,15572,15892,5219,8409,1629,3317,761,27,77165,
,"Not applicable",7498170,5906487,4800703,1661786,2495294,499744,252053,398458,5265,23517955,
"#;

const RAGGED_FFILL_HEADER: &str = r#"Australian Bureau of Statistics

"2016 Census - Counting Persons, Place of Usual Residence"
"SEXP Sex and FMGF - 1 Digit Level by STATE"
"Counting: Persons Place of Usual Residence"

Filters:
"Default Summation","Persons Place of Usual Residence"

"#;

/// Sex × family composition by state, sparse down the outer row level
pub const RAGGED_FFILL: TestCase = TestCase {
    header: RAGGED_FFILL_HEADER,
    body: RAGGED_FFILL_BODY,
    footer: FOOTER_2021,
    row_headers: &["SEXP Sex", "FMGF - 1 Digit Level"],
    col_headers: &[
        "New South Wales",
        "Victoria",
        "Queensland",
        "South Australia",
        "Western Australia",
        "Tasmania",
        "Northern Territory",
        "Australian Capital Territory",
        "Other Territories",
        "Total",
    ],
    column_dimensions: &["STATE"],
};

/// The same table as [`RAGGED_FFILL`] under the "Dataset:" footer variant
pub const RAGGED_FFILL_DATASET_FOOTER: TestCase = TestCase {
    footer: FOOTER_DATASET_VARIANT,
    ..RAGGED_FFILL
};

/// Every single-table fixture
pub fn all_cases() -> Vec<TestCase> {
    vec![
        MULTILEVEL_ROWS,
        MULTILEVEL_ROWS2,
        SPATIAL_X_ATTR,
        OD_DATA,
        COL_MULTIINDEX,
        FILTERS_2021,
        INT_ROWS_AND_TOTALS,
        RAGGED_FFILL,
        RAGGED_FFILL_DATASET_FOOTER,
    ]
}

/// A body of occupation wafers over the origin/destination table
pub fn wafer_document(titles: &[&str]) -> String {
    let mut body = String::new();
    for title in titles {
        body.push_str(&format!("\n\" {title}\"\n"));
        body.push_str(OD_DATA.body.trim_matches('\n'));
        body.push('\n');
    }
    format!("{}{}\n{}", OD_DATA.header, body, OD_DATA.footer)
}
