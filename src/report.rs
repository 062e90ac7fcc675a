//! Reporting collaborators: CSV writers and SVG line charts.
//!
//! The harness hands over complete records; everything presentational
//! happens here. Writers target any [`io::Write`], so the suite binary
//! can point them at a file or stdout and tests can capture output in a
//! `Vec<u8>`.
//!
//! Substrings are truncated for display only — records always carry the
//! full strings. Charts are emitted as standalone SVG documents, one
//! series per chart, with the matrix cell count on the x axis.

use std::io::{self, Write};

use crate::harness::{AlignmentRecord, SquareRecord};

/// Column header for scorer result files.
pub const ALIGNMENT_HEADER: &str =
    "problem,scenario,delta,n,m,best_score,best_len,astart,bstart,asub,bsub,time_ms,mem_bytes";

/// Column header for zero-square result files.
pub const SQUARE_HEADER: &str = "problem,m,n,p_one,k,top_i,top_j,time_ms,mem_bytes";

/// Join fields into one CSV line, quoting where needed.
///
/// A field is quoted when it contains a comma, a double quote, or a
/// newline; embedded quotes are doubled.
pub fn csv_row(fields: &[&str]) -> String {
    let mut line = String::new();
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            line.push(',');
        }
        let needs_quoting = field.contains(',') || field.contains('"') || field.contains('\n');
        if needs_quoting {
            line.push('"');
            for c in field.chars() {
                if c == '"' {
                    line.push('"');
                }
                line.push(c);
            }
            line.push('"');
        } else {
            line.push_str(field);
        }
    }
    line
}

/// Shorten long substrings for display: anything over 120 characters
/// keeps the first and last 60 with `...` in between.
pub fn truncate_for_display(s: &str) -> String {
    const LIMIT: usize = 120;
    const KEEP: usize = 60;
    let count = s.chars().count();
    if count <= LIMIT {
        return s.to_owned();
    }
    let head: String = s.chars().take(KEEP).collect();
    let tail_start = s
        .char_indices()
        .nth(count - KEEP)
        .map_or(s.len(), |(idx, _)| idx);
    format!("{head}...{}", &s[tail_start..])
}

/// Write the scorer header plus one CSV line per record.
pub fn write_alignment_records(
    out: &mut impl Write,
    records: &[AlignmentRecord],
) -> io::Result<()> {
    writeln!(out, "{ALIGNMENT_HEADER}")?;
    for r in records {
        let fields = [
            "P1".to_owned(),
            r.scenario.to_owned(),
            r.delta.to_string(),
            r.n.to_string(),
            r.m.to_string(),
            r.result.best_score.to_string(),
            r.result.best_len.to_string(),
            r.result.a_start.to_string(),
            r.result.b_start.to_string(),
            truncate_for_display(&r.result.a_sub),
            truncate_for_display(&r.result.b_sub),
            format!("{:.3}", r.metrics.elapsed_ms),
            r.metrics.mem_bytes.to_string(),
        ];
        let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
        writeln!(out, "{}", csv_row(&refs))?;
    }
    Ok(())
}

/// Write the zero-square header plus one CSV line per record.
pub fn write_square_records(out: &mut impl Write, records: &[SquareRecord]) -> io::Result<()> {
    writeln!(out, "{SQUARE_HEADER}")?;
    for r in records {
        let fields = [
            "P2".to_owned(),
            r.rows.to_string(),
            r.cols.to_string(),
            format!("{:.3}", r.p_one),
            r.result.k.to_string(),
            r.result.top_row.to_string(),
            r.result.top_col.to_string(),
            format!("{:.3}", r.metrics.elapsed_ms),
            r.metrics.mem_bytes.to_string(),
        ];
        let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
        writeln!(out, "{}", csv_row(&refs))?;
    }
    Ok(())
}

/// Chart input: (cell count, elapsed ms) and (cell count, estimate bytes)
/// point lists derived from a square suite.
pub fn square_chart_points(records: &[SquareRecord]) -> (Vec<(u64, f64)>, Vec<(u64, f64)>) {
    let time = records
        .iter()
        .map(|r| ((r.rows * r.cols) as u64, r.metrics.elapsed_ms))
        .collect();
    let mem = records
        .iter()
        .map(|r| ((r.rows * r.cols) as u64, r.metrics.mem_bytes as f64))
        .collect();
    (time, mem)
}

/// One labeled series to plot against `m*n`.
pub struct ChartSeries<'a> {
    pub title: &'a str,
    pub label: &'a str,
    pub points: &'a [(u64, f64)],
}

const CHART_WIDTH: i64 = 900;
const CHART_HEIGHT: i64 = 600;
const MARGIN_LEFT: i64 = 90;
const MARGIN_RIGHT: i64 = 60;
const MARGIN_TOP: i64 = 70;
const MARGIN_BOTTOM: i64 = 80;
const SERIES_COLOR: &str = "#0066cc";

/// Render one line/scatter chart as a standalone SVG document.
///
/// Axes carry five ticks each; the y range gets 10% headroom above the
/// largest value. An empty point list renders nothing.
pub fn render_chart(out: &mut impl Write, series: &ChartSeries<'_>) -> io::Result<()> {
    let points = series.points;
    if points.is_empty() {
        return Ok(());
    }

    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).fold(0.0f64, f64::max);
    let y_max = if max_y * 1.1 <= 0.0 { 1.0 } else { max_y * 1.1 };
    let x_range = if max_x == min_x {
        1.0
    } else {
        (max_x - min_x) as f64
    };

    let left = MARGIN_LEFT;
    let right = CHART_WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = CHART_HEIGHT - MARGIN_BOTTOM;

    let x_pix = |x: u64| -> i64 {
        let frac = (x - min_x) as f64 / x_range;
        left + (frac * (right - left) as f64).round() as i64
    };
    let y_pix = |y: f64| -> i64 { bottom - (y / y_max * (bottom - top) as f64).round() as i64 };

    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CHART_WIDTH}\" height=\"{CHART_HEIGHT}\" \
         viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" font-family=\"monospace\">"
    )?;
    writeln!(
        out,
        "  <rect width=\"{CHART_WIDTH}\" height=\"{CHART_HEIGHT}\" fill=\"white\"/>"
    )?;
    writeln!(
        out,
        "  <text x=\"{left}\" y=\"{}\" font-size=\"20\" font-weight=\"bold\">{}</text>",
        top - 30,
        series.title
    )?;
    writeln!(
        out,
        "  <text x=\"{}\" y=\"{}\" font-size=\"14\">m*n</text>",
        (left + right) / 2 - 20,
        bottom + 45
    )?;
    writeln!(
        out,
        "  <text x=\"10\" y=\"{}\" font-size=\"14\">{}</text>",
        (top + bottom) / 2,
        series.label
    )?;

    // Axes.
    writeln!(
        out,
        "  <line x1=\"{left}\" y1=\"{top}\" x2=\"{left}\" y2=\"{bottom}\" stroke=\"black\"/>"
    )?;
    writeln!(
        out,
        "  <line x1=\"{left}\" y1=\"{bottom}\" x2=\"{right}\" y2=\"{bottom}\" stroke=\"black\"/>"
    )?;

    // X ticks at quarter steps of the data range.
    for t in 0..5 {
        let x_val = if max_x == min_x {
            min_x as f64
        } else if t == 4 {
            max_x as f64
        } else {
            min_x as f64 + t as f64 * (max_x - min_x) as f64 / 4.0
        };
        let px = x_pix(x_val.round() as u64);
        writeln!(
            out,
            "  <line x1=\"{px}\" y1=\"{bottom}\" x2=\"{px}\" y2=\"{}\" stroke=\"black\"/>",
            bottom + 6
        )?;
        writeln!(
            out,
            "  <text x=\"{px}\" y=\"{}\" font-size=\"14\" text-anchor=\"middle\">{}</text>",
            bottom + 25,
            x_val.round() as u64
        )?;
    }

    // Y ticks from zero to the padded maximum.
    for t in 0..5 {
        let y_val = if t == 4 { y_max } else { t as f64 * y_max / 4.0 };
        let py = y_pix(y_val);
        writeln!(
            out,
            "  <line x1=\"{}\" y1=\"{py}\" x2=\"{left}\" y2=\"{py}\" stroke=\"black\"/>",
            left - 6
        )?;
        writeln!(
            out,
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" text-anchor=\"end\">{y_val:.1}</text>",
            left - 10,
            py + 5
        )?;
    }

    // Series polyline plus point markers.
    let path: Vec<String> = points
        .iter()
        .map(|&(x, y)| format!("{},{}", x_pix(x), y_pix(y)))
        .collect();
    writeln!(
        out,
        "  <polyline points=\"{}\" fill=\"none\" stroke=\"{SERIES_COLOR}\" stroke-width=\"2\"/>",
        path.join(" ")
    )?;
    for &(x, y) in points {
        writeln!(
            out,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"4\" fill=\"{SERIES_COLOR}\"/>",
            x_pix(x),
            y_pix(y)
        )?;
    }

    // Legend box in the top-right corner.
    let legend_w = 200;
    let legend_h = 50;
    let legend_x = right - legend_w;
    let legend_y = top;
    let line_y = legend_y + legend_h / 2;
    writeln!(
        out,
        "  <rect x=\"{legend_x}\" y=\"{legend_y}\" width=\"{legend_w}\" height=\"{legend_h}\" \
         fill=\"#f5f5f5\" stroke=\"darkgray\"/>"
    )?;
    writeln!(
        out,
        "  <line x1=\"{}\" y1=\"{line_y}\" x2=\"{}\" y2=\"{line_y}\" stroke=\"{SERIES_COLOR}\" stroke-width=\"2\"/>",
        legend_x + 15,
        legend_x + 55
    )?;
    writeln!(
        out,
        "  <circle cx=\"{}\" cy=\"{line_y}\" r=\"4\" fill=\"{SERIES_COLOR}\"/>",
        legend_x + 35
    )?;
    writeln!(
        out,
        "  <text x=\"{}\" y=\"{}\" font-size=\"14\">{} vs m*n</text>",
        legend_x + 70,
        line_y + 5,
        series.label
    )?;

    writeln!(out, "</svg>")?;
    Ok(())
}
