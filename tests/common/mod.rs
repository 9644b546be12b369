#![allow(dead_code)]

use sitescope::{DashboardConfig, Dataset, Source};

pub const HEADER: &str = "Province,District,Sub-district,Happy Block,Latitude,Longitude,Net Add,Potential Score,%Port_Utilize,Market Share True (%),Market Share AIS (%),Market Share 3BB (%),Market Share NT (%),L2_Aging,Port Use,Household,L2,Port Capacity,Port Available,Competitor Speed,True Speed";

pub const SITES: &str = "\
Province,District,Sub-district,Happy Block,Latitude,Longitude,Net Add,Potential Score,%Port_Utilize,Market Share True (%),Market Share AIS (%),Market Share 3BB (%),Market Share NT (%),L2_Aging,Port Use,Household,L2,Port Capacity,Port Available,Competitor Speed,True Speed
Bangkok,Bang Rak,Si Lom,HB-001,13.7279,100.5241,4,82,75.456,31.2,28.9,30.1,9.8,0,48,1200,L2-A,64,16,500,1000
Bangkok,Bang Rak,Suriyawong,HB-002,13.7240,100.5290,-2,64,40,22.125,35,33,9.875,5,20,900,L2-B,48,28,300,500
Bangkok,Pathum Wan,Lumphini,HB-003,13.7310,100.5440,6,91,92.5,40,25,25,10,12,60,1500,L2-C,64,4,1000,1000
Chiang Mai,Mueang,Si Phum,HB-101,18.7950,98.9860,0,55,12,18,41,30,11,13,6,400,L2-D,48,42,200,300
Chiang Mai,Mueang,Chang Khlan,HB-102,18.7790,99.0000,n/a,70,55,26.5,30,32,11.5,30,24,650,L2-E,48,24,500,500
";

pub fn sites() -> Dataset {
    load(SITES)
}

pub fn load(csv: &str) -> Dataset {
    Dataset::load(Source::Text(csv), &DashboardConfig::default()).expect("fixture should load")
}

/// A table with only the given `rows` under the full header.
pub fn with_rows(rows: &[&str]) -> Dataset {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    load(&csv)
}
