use std::io::Write;

use pricechart_core::{ChartSpec, DateRange, QuoteFetcher, Series, Symbol};

use crate::cli::{FetchArgs, OutputFormat};
use crate::error::CliError;

const CSV_HEADER: [&str; 3] = ["Date", "Close", "Volume"];

pub async fn run(
    args: &FetchArgs,
    fetcher: &QuoteFetcher,
    range: DateRange,
) -> Result<(), CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let series = fetcher.fetch_series(&symbol, range).await?;

    let stdout = std::io::stdout();
    render(&symbol, &series, args.format, args.pretty, stdout.lock())
}

fn render<W: Write>(
    symbol: &Symbol,
    series: &Series,
    format: OutputFormat,
    pretty: bool,
    mut out: W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Chart => {
            let chart = ChartSpec::from_series(symbol, series);
            write_json(&chart, pretty, &mut out)?;
        }
        OutputFormat::Json => write_json(series, pretty, &mut out)?,
        OutputFormat::Csv => write_csv(series, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn write_json<T, W>(value: &T, pretty: bool, out: &mut W) -> Result<(), CliError>
where
    T: serde::Serialize + ?Sized,
    W: Write,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(series: &Series, out: W) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for (date, close, volume) in series.rows() {
        writer.write_record([date.to_string(), close.to_string(), volume.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
