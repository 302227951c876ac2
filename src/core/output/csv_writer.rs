//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::MessageRecord;
use crate::error::Result;

const HEADER: [&str; 12] = [
    "Timestamp",
    "Sender",
    "Text",
    "Date",
    "Year",
    "MonthNum",
    "Month",
    "Day",
    "DayName",
    "Hour",
    "Minute",
    "HourBucket",
];

/// Writes the record table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Text`, then every derived calendar
///   field (`Date` … `HourBucket`)
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)
}

/// Converts the record table to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to a
/// file.
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(records: &[MessageRecord], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(record: &MessageRecord) -> [String; 12] {
    [
        record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        record.sender.clone(),
        record.text.clone(),
        record.date.to_string(),
        record.year.to_string(),
        record.month_num.to_string(),
        record.month.clone(),
        record.day.to_string(),
        record.day_name.clone(),
        record.hour.to_string(),
        record.minute.to_string(),
        record.hour_bucket.clone(),
    ]
}
