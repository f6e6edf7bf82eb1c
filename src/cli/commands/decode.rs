//! The decode command: single report, batch file, and interactive modes

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use colored::Colorize;
use tracing::info;

use crate::app::models::{
    ChangeKind, ForecastPeriod, Intensity, MetarReport, Pressure, PressureUnit, Report, SkyCover,
    SkyLayer, TafReport, Trend, TrendKind, Visibility, VisibilityUnit, WeatherPhenomenon, Wind,
    WindDirection,
};
use crate::app::services::decoder;
use crate::cli::args::{Args, OutputFormat};
use crate::cli::commands::shared::{self, DecodeStats};
use crate::config::DecodeConfig;

/// Decode the single report given as a positional argument
pub fn run_single(raw: &str, args: &Args) -> io::Result<DecodeStats> {
    let config = args.decode_config();

    let mut stats = DecodeStats::default();
    decode_one(raw, &config, args, &mut stats, true);
    Ok(stats)
}

/// Decode newline-delimited reports from the file argument
pub fn run_file(path: &std::path::Path, args: &Args) -> io::Result<DecodeStats> {
    let config = args.decode_config();

    let reports: Vec<String> = BufReader::new(File::open(path)?)
        .lines()
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();

    info!(count = reports.len(), "decoding batch file");

    let progress = args
        .quiet
        .then(|| shared::create_progress_bar(reports.len() as u64, "decoding"));

    let mut stats = DecodeStats::default();
    for raw in &reports {
        decode_one(raw, &config, args, &mut stats, !args.quiet);
        if let Some(progress) = &progress {
            progress.inc(1);
        }
    }

    if let Some(progress) = progress {
        progress.finish_and_clear();
    }
    stats.print_summary();
    Ok(stats)
}

/// Read reports interactively, one per line, until EOF
pub fn run_interactive(args: &Args) -> io::Result<DecodeStats> {
    let config = args.decode_config();
    let mut stats = DecodeStats::default();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("report> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        decode_one(raw, &config, args, &mut stats, true);
    }

    Ok(stats)
}

/// Decode one report, print the result, and update the statistics
fn decode_one(raw: &str, config: &DecodeConfig, args: &Args, stats: &mut DecodeStats, print: bool) {
    stats.total += 1;

    match decoder::decode_with(raw, config) {
        Ok(report) => {
            stats.decoded += 1;
            if !report.warnings().is_empty() {
                stats.with_warnings += 1;
            }
            if print {
                print_report(&report, args.format);
            }
        }
        Err(error) => {
            stats.failed += 1;
            eprintln!("{} {error}", "error:".red().bold());
            eprintln!("  input: {raw}");
        }
    }
}

fn print_report(report: &Report, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(error) => eprintln!("{} {error}", "error:".red().bold()),
        },
        OutputFormat::Text => {
            match report {
                Report::Metar(metar) => print_metar(metar),
                Report::Taf(taf) => print_taf(taf),
            }
            for warning in report.warnings() {
                eprintln!("  {} {warning}", "warning:".yellow());
            }
        }
    }
}

// =============================================================================
// Text rendering
// =============================================================================

fn print_metar(metar: &MetarReport) {
    let mut flags = Vec::new();
    if metar.is_automated {
        flags.push("AUTO");
    }
    if metar.is_nil {
        flags.push("NIL");
    }
    println!(
        "{} {} day {:02} {:02}:{:02}Z {}",
        "METAR".bold(),
        metar.station.cyan(),
        metar.observation_time.day,
        metar.observation_time.hour,
        metar.observation_time.minute,
        flags.join(" "),
    );

    if let Some(wind) = &metar.wind {
        println!("  wind:        {}", fmt_wind(wind));
    }
    if let Some(vis) = &metar.visibility {
        println!("  visibility:  {}", fmt_visibility(vis));
    }
    for rvr in &metar.runway_visual_ranges {
        println!(
            "  rvr:         runway {} {} {}",
            rvr.runway,
            rvr.visual_range,
            match rvr.unit {
                crate::app::models::RvrUnit::Feet => "ft",
                crate::app::models::RvrUnit::Meters => "m",
            }
        );
    }
    for state in &metar.runway_states {
        println!(
            "  runway {}:   {}, {}, braking {}",
            state.runway, state.deposit, state.depth, state.braking
        );
    }
    if !metar.weather.is_empty() {
        let rendered: Vec<String> = metar.weather.iter().map(fmt_weather).collect();
        println!("  weather:     {}", rendered.join(", "));
    }
    for layer in &metar.sky {
        println!("  sky:         {}", fmt_sky(layer));
    }
    if let Some(temp) = &metar.temperature {
        match temp.dewpoint {
            Some(dewpoint) => println!(
                "  temperature: {}°C, dewpoint {}°C",
                temp.temperature, dewpoint
            ),
            None => println!("  temperature: {}°C", temp.temperature),
        }
    }
    if let Some(altimeter) = &metar.altimeter {
        println!("  altimeter:   {}", fmt_pressure(altimeter));
    }
    for trend in &metar.trends {
        println!("  trend:       {}", fmt_trend(trend));
    }
    if !metar.remarks.is_empty() {
        println!("  remarks:     {} entries", metar.remarks.len());
    }
}

fn print_taf(taf: &TafReport) {
    let valid = taf.valid_period.map_or_else(
        || "valid period unknown".to_string(),
        |v| {
            format!(
                "valid {:02}/{:02}Z to {:02}/{:02}Z",
                v.start.day, v.start.hour, v.end.day, v.end.hour
            )
        },
    );
    println!(
        "{} {} issued day {:02} {:02}:{:02}Z, {}",
        "TAF".bold(),
        taf.station.cyan(),
        taf.issue_time.day,
        taf.issue_time.hour,
        taf.issue_time.minute,
        valid,
    );

    for period in &taf.periods {
        println!("  {}", fmt_period(period));
    }
    if !taf.remarks.is_empty() {
        println!("  remarks: {} entries", taf.remarks.len());
    }
}

fn fmt_period(period: &ForecastPeriod) -> String {
    let kind = match period.kind {
        ChangeKind::Initial => "initial".to_string(),
        ChangeKind::From => "from".to_string(),
        ChangeKind::Becoming => "becoming".to_string(),
        ChangeKind::Temporary => "temporary".to_string(),
        ChangeKind::Probability { percent, tempo } => {
            if tempo {
                format!("prob{percent} temporary")
            } else {
                format!("prob{percent}")
            }
        }
    };

    let window = period.window.map_or_else(String::new, |w| {
        format!(
            " {:02}/{:02}Z-{:02}/{:02}Z",
            w.start.day, w.start.hour, w.end.day, w.end.hour
        )
    });

    let mut parts = Vec::new();
    if let Some(wind) = &period.wind {
        parts.push(format!("wind {}", fmt_wind(wind)));
    }
    if let Some(vis) = &period.visibility {
        parts.push(format!("visibility {}", fmt_visibility(vis)));
    }
    for wx in &period.weather {
        parts.push(fmt_weather(wx));
    }
    for layer in &period.sky {
        parts.push(fmt_sky(layer));
    }
    if let Some(qnh) = &period.qnh {
        parts.push(format!("QNH {}", fmt_pressure(qnh)));
    }

    format!("{kind}{window}: {}", parts.join(", "))
}

fn fmt_wind(wind: &Wind) -> String {
    let direction = match wind.direction {
        WindDirection::Degrees(deg) => format!("{deg}°"),
        WindDirection::Variable => "variable".to_string(),
    };
    let mut out = format!("{direction} at {} {}", wind.speed, wind.unit.abbreviation());
    if let Some(gust) = wind.gust {
        out.push_str(&format!(" gusting {gust}"));
    }
    if let Some((from, to)) = wind.variable_range {
        out.push_str(&format!(", varying {from}°-{to}°"));
    }
    out
}

fn fmt_visibility(vis: &Visibility) -> String {
    if vis.is_cavok {
        return "CAVOK".to_string();
    }
    let unit = match vis.unit {
        VisibilityUnit::Meters => "m",
        VisibilityUnit::StatuteMiles => "SM",
    };
    let qualifier = if vis.is_greater_than {
        "at least "
    } else if vis.is_less_than {
        "less than "
    } else {
        ""
    };
    format!("{qualifier}{} {unit}", vis.value)
}

fn fmt_weather(wx: &WeatherPhenomenon) -> String {
    let mut parts: Vec<&str> = Vec::new();
    match wx.intensity {
        Intensity::Light => parts.push("light"),
        Intensity::Heavy => parts.push("heavy"),
        Intensity::Vicinity => parts.push("in vicinity:"),
        Intensity::Recent => parts.push("recent"),
        Intensity::Moderate => {}
    }
    for descriptor in &wx.descriptors {
        parts.push(descriptor.description());
    }
    for phenomenon in &wx.phenomena {
        parts.push(phenomenon.description());
    }
    parts.join(" ")
}

fn fmt_sky(layer: &SkyLayer) -> String {
    let coverage = match layer.cover {
        SkyCover::Clear => "clear sky",
        SkyCover::Few => "few clouds",
        SkyCover::Scattered => "scattered clouds",
        SkyCover::Broken => "broken clouds",
        SkyCover::Overcast => "overcast",
        SkyCover::VerticalVisibility => "vertical visibility",
        SkyCover::NoSignificantCloud => "no significant cloud",
        SkyCover::NoCloudDetected => "no cloud detected",
        SkyCover::Unknown => "unknown coverage",
    };
    let mut out = coverage.to_string();
    if let Some(height) = layer.height_ft {
        out.push_str(&format!(" at {height} ft"));
    }
    if let Some(convective) = layer.convective {
        out.push_str(match convective {
            crate::app::models::ConvectiveType::Cumulonimbus => " (cumulonimbus)",
            crate::app::models::ConvectiveType::ToweringCumulus => " (towering cumulus)",
        });
    }
    out
}

fn fmt_pressure(pressure: &Pressure) -> String {
    match pressure.unit {
        PressureUnit::InchesOfMercury => format!("{:.2} inHg", pressure.value),
        PressureUnit::Hectopascals => format!("{:.0} hPa", pressure.value),
    }
}

fn fmt_trend(trend: &Trend) -> String {
    match trend.kind {
        TrendKind::NoSignificantChange => "no significant change expected".to_string(),
        TrendKind::Becoming | TrendKind::Temporary => trend.raw.clone(),
    }
}
