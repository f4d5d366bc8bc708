//! End-to-end: files on disk through the service into a TSV sheet.

use std::fs;
use std::path::Path;

use promosheet_adapters::{DelimitedSheetWriter, FileAdjustmentSource, FileLookupSource};
use promosheet_core::{application::PromoSheetService, domain::RunWarning};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn item(style: &str) -> String {
    format!("I|U1|Users|C1|Cust|CX|L1|Stores|LX|2024-03-04|2024-03-10|PG1|{style}|RED|Dress|49.99|USD\n")
}

fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();

    write(
        dir,
        "adjustment_001.txt",
        &format!(
            "A|100|EXT1|Spring Dresses|SPRING|RULE1\n\
             D|en|Spring Dresses 30% off|dresses.png\n\
             S|2024-03-04|2024-03-10|00:00|24|Y|Y|Y|Y|Y|Y|Y\n\
             V|Country|USA|\n\
             V|PromoCategory|Dresses|\n\
             L|STORE|I|H1|East|S-1\n\
             LB|S-1|ZONE-A|BU-1\n\
             {}{}{}",
            item("STYLE1"),
            item("STYLE2"),
            item("GHOST"),
        ),
    );
    write(
        dir,
        "adjustment_002.txt",
        &format!(
            "A|200|EXT2|Tops|SPRING|RULE2\n\
             S|2024-03-04|2024-03-10|00:00|24|Y|Y|Y|Y|Y|Y|Y\n\
             V|Country|CAN|\n\
             V|PromoCategory|Tops|\n\
             {}",
            item("STYLE3"),
        ),
    );
    write(dir, "adjustment_003.txt", "A|300|EXT3|Fall|FALL|RULE3\nZ|never parsed\n");

    write(
        dir,
        "item_info_20240301.txt",
        "V1|Red Dress|x|STYLE1|x|x|x|x|Red|M|x|0|x\n\
         V2|Blue Dress|x|STYLE2|x|x|x|x|Blue|M|x|0|x\n\
         V3|Navy Dress|x|STYLE2|x|x|x|x|Navy|M|x|0|x\n\
         V4|Pink Top|x|STYLE3|x|x|x|x|Pink|S|x|0|x\n\
         V5|Gray Top|x|STYLE3|x|x|x|x|Gray|S|x|1|x\n",
    );
    write(
        dir,
        "other_info.txt",
        "STYLE1|Womens Dresses|D10|SD1|C1|Y|||| \n",
    );
    write(dir, "signage.txt", "100|SIGN 30% OFF\n");
    tmp
}

#[test]
fn generates_sheet_from_files() {
    let input = fixture();
    let output = TempDir::new().unwrap();
    let sheet_path = output.path().join("promo_sheet.tsv");

    let service = PromoSheetService::new(
        Box::new(FileAdjustmentSource::new(input.path(), "adjustment_*.txt")),
        Box::new(FileLookupSource::new(
            input.path(),
            "item_info_*.txt",
            "other_info.txt",
            "signage.txt",
        )),
        Box::new(DelimitedSheetWriter::new(&sheet_path)),
    );
    let summary = service.generate("SPRING").unwrap();

    assert_eq!(summary.adjustments, 2);
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.country, "USA");
    assert!(summary
        .warnings
        .iter()
        .any(|w| matches!(w, RunWarning::CountryMismatch { oid, .. } if oid == "200")));

    let content = fs::read_to_string(&sheet_path).unwrap();
    let rows: Vec<Vec<&str>> = content
        .lines()
        .skip(3)
        .take(3)
        .map(|line| line.split('\t').collect())
        .collect();

    assert_eq!(rows[0][..6], ["Dresses", "Spring Dresses", "STYLE1", "Red", "Red Dress", "SIGN 30% OFF"]);
    assert_eq!(rows[0][6..9], ["D10", "SD1", "C1"]);
    assert_eq!(rows[1][2..5], ["STYLE2", "ALL", "Blue Dress"]);
    // Filtered variant leaves a single color.
    assert_eq!(rows[2][..5], ["Tops", "Tops", "STYLE3", "Pink", "Pink Top"]);
}

#[test]
fn missing_item_info_is_not_found() {
    let input = fixture();
    fs::remove_file(input.path().join("item_info_20240301.txt")).unwrap();

    let service = PromoSheetService::new(
        Box::new(FileAdjustmentSource::new(input.path(), "adjustment_*.txt")),
        Box::new(FileLookupSource::new(
            input.path(),
            "item_info_*.txt",
            "other_info.txt",
            "signage.txt",
        )),
        Box::new(DelimitedSheetWriter::new(input.path().join("out.tsv"))),
    );
    let err = service.generate("SPRING").unwrap_err();
    assert!(err.to_string().contains("item_info_*.txt"));
}
