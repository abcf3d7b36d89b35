use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use thiserror::Error;

use crate::point::DataPoint;

/// Failures in the text-file collaborators. Kept separate from the engine's
/// own error type; none of these can occur once clustering has started.
#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("input file {0} must have a .txt extension")]
    NotTextFile(String),
    #[error("no points found in {0}")]
    NoPoints(String),
    #[error("non-numeric data on line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads one point per line: the first two whitespace-separated fields are
/// parsed as x and y, anything after them is ignored.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, DataFileError> {
    let path = path.as_ref();
    if path.extension().and_then(|e| e.to_str()) != Some("txt") {
        return Err(DataFileError::NotTextFile(path.display().to_string()));
    }

    let reader = BufReader::new(File::open(path)?);
    let points = parse_points(reader)?;
    if points.is_empty() {
        return Err(DataFileError::NoPoints(path.display().to_string()));
    }
    Ok(points)
}

fn parse_points(reader: impl BufRead) -> Result<Vec<DataPoint>, DataFileError> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let malformed = || DataFileError::MalformedLine {
            line: index + 1,
            content: line.clone(),
        };

        let (raw_x, raw_y) = line
            .split_whitespace()
            .next_tuple()
            .ok_or_else(|| malformed())?;
        let x: f64 = raw_x.parse().map_err(|_| malformed())?;
        let y: f64 = raw_y.parse().map_err(|_| malformed())?;
        points.push(DataPoint::new(x, y));
    }
    Ok(points)
}

/// Writes one `x  y cluster` record per point, in original input order.
pub fn write_results(
    path: impl AsRef<Path>,
    points: &[DataPoint],
) -> Result<(), DataFileError> {
    let mut file = BufWriter::new(File::create(path)?);
    write_points(&mut file, points)?;
    file.flush()?;
    Ok(())
}

fn write_points(writer: &mut impl Write, points: &[DataPoint]) -> Result<(), DataFileError> {
    for point in points {
        // -1 marks a point that was never assigned; cannot happen after a run.
        let label = point.cluster.map_or(-1, |c| c as i64);
        writeln!(writer, "{:.6}  {:.6} {}", point.x, point.y, label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_two_fields_per_line() {
        let input = Cursor::new("1.5 -2.0\n0 3\n");
        let points = parse_points(input).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, 1.5);
        assert_eq!(points[0].y, -2.0);
        assert_eq!(points[1].cluster, None);
    }

    #[test]
    fn ignores_trailing_fields() {
        let input = Cursor::new("1 2 extra tokens\n");
        let points = parse_points(input).unwrap();
        assert_eq!(points[0].x, 1.0);
        assert_eq!(points[0].y, 2.0);
    }

    #[test]
    fn reports_line_number_of_malformed_data() {
        let input = Cursor::new("1 2\nfoo bar\n");
        let err = parse_points(input).unwrap_err();
        match err {
            DataFileError::MalformedLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "foo bar");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_line_with_a_single_field() {
        let input = Cursor::new("1.0\n");
        assert!(matches!(
            parse_points(input),
            Err(DataFileError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_txt_extension_before_opening() {
        let err = read_points("kmeans-data.csv").unwrap_err();
        assert!(matches!(err, DataFileError::NotTextFile(_)));
    }

    #[test]
    fn writes_six_decimal_records_in_input_order() {
        let mut points = vec![DataPoint::new(0.0, 0.5), DataPoint::new(10.0, 1.0)];
        points[0].cluster = Some(0);
        points[1].cluster = Some(1);

        let mut out = Vec::new();
        write_points(&mut out, &points).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.000000  0.500000 0\n10.000000  1.000000 1\n"
        );
    }
}
