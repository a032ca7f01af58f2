use crate::config::WeightSet;
use crate::roi::{CityProjection, InvestmentInputs, ProjectionResult};
use crate::scoring::{AgeBracket, DemographicProfile, SiteSignals};
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

/// A computed result together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Location {
        signals: SiteSignals,
        weights: WeightSet,
        score: f64,
    },
    Demographics {
        profile: DemographicProfile,
        score: f64,
    },
    Roi {
        inputs: InvestmentInputs,
        growth_rate: f64,
        result: ProjectionResult,
    },
    City {
        budget: f64,
        ev_ownership_pct: f64,
        market_share_pct: f64,
        projection: CityProjection,
    },
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        match report {
            Report::Location {
                signals,
                weights,
                score,
            } => self.write_location(signals, weights, *score),
            Report::Demographics { profile, score } => self.write_demographics(profile, *score),
            Report::Roi {
                inputs,
                growth_rate,
                result,
            } => self.write_roi(inputs, *growth_rate, result),
            Report::City {
                budget,
                ev_ownership_pct,
                market_share_pct,
                projection,
            } => self.write_city(*budget, *ev_ownership_pct, *market_share_pct, projection),
        }
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.chars().count()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_location(
        &mut self,
        signals: &SiteSignals,
        weights: &WeightSet,
        score: f64,
    ) -> anyhow::Result<()> {
        self.write_header("Location Score")?;
        writeln!(self.writer, "  {:<22} {:>8} {:>8}", "Factor", "Value", "Weight")?;
        let rows = [
            ("Traffic density", signals.traffic_density, weights.traffic),
            ("Pedestrian traffic", signals.pedestrian_traffic, weights.pedestrian),
            ("Competitor distance km", signals.competitor_distance, weights.competitor),
            ("Demographic score", signals.demographic_score, weights.demographic),
        ];
        for (name, value, weight) in rows {
            writeln!(self.writer, "  {name:<22} {value:>8.2} {weight:>8.2}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "  Score: {} / 100", color_score(score, 100.0))?;
        Ok(())
    }

    fn write_demographics(
        &mut self,
        profile: &DemographicProfile,
        score: f64,
    ) -> anyhow::Result<()> {
        self.write_header("Demographic Score")?;
        if profile.population > 0 {
            writeln!(self.writer, "  Population: {}", profile.population)?;
        }
        writeln!(self.writer, "  Average income: {:.0}", profile.avg_income)?;
        writeln!(
            self.writer,
            "  EV ownership: {:.1}%",
            profile.ev_ownership * 100.0
        )?;
        for bracket in AgeBracket::ALL {
            let fraction = profile.age_distribution.fraction(bracket);
            if fraction != 0.0 {
                writeln!(
                    self.writer,
                    "  Age {:<6} {:>5.1}%",
                    bracket.label(),
                    fraction * 100.0
                )?;
            }
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "  Score: {}", color_score(score, 1.0))?;
        Ok(())
    }

    fn write_roi(
        &mut self,
        inputs: &InvestmentInputs,
        growth_rate: f64,
        result: &ProjectionResult,
    ) -> anyhow::Result<()> {
        self.write_header("ROI Projection")?;
        writeln!(self.writer, "  Investment: {:.2}", inputs.investment_cost)?;
        writeln!(self.writer, "  Yearly revenue: {:.2}", result.yearly_revenue)?;
        writeln!(self.writer, "  Base yearly cash flow: {:.2}", result.yearly_cash_flow)?;
        writeln!(self.writer, "  Growth: {:.1}% per year", growth_rate * 100.0)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "  {:>4}  {:>18}", "Year", "Cumulative")?;
        for (index, cumulative) in result.cash_flows.iter().enumerate() {
            writeln!(
                self.writer,
                "  {:>4}  {}",
                index + 1,
                color_signed(*cumulative, &format!("{cumulative:>18.2}"))
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  ROI: {}",
            color_signed(result.roi, &format!("{:.2}%", result.roi))
        )?;
        match result.break_even_year() {
            Some(year) => writeln!(self.writer, "  Break-even: year {year}")?,
            None => writeln!(self.writer, "  Break-even: not within horizon")?,
        }
        Ok(())
    }

    fn write_city(
        &mut self,
        budget: f64,
        ev_ownership_pct: f64,
        market_share_pct: f64,
        projection: &CityProjection,
    ) -> anyhow::Result<()> {
        let city = projection.city.as_deref().unwrap_or("Unknown city");
        self.write_header(&format!("{city} Financial Projection"))?;
        writeln!(self.writer, "  Investment budget: {budget:.0}")?;
        writeln!(self.writer, "  EV ownership: {ev_ownership_pct:.1}%")?;
        writeln!(self.writer, "  Market share: {market_share_pct:.1}%")?;
        writeln!(self.writer, "  Growth factor: {}", projection.growth_factor)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "  {:>4}  {:>14}  {:>14}", "Year", "Revenue", "Cost")?;
        for (index, (revenue, cost)) in projection
            .revenues
            .iter()
            .zip(projection.costs.iter())
            .enumerate()
        {
            writeln!(self.writer, "  {:>4}  {revenue:>14}  {cost:>14}", index + 1)?;
        }
        writeln!(
            self.writer,
            "  {:>4}  {:>14}  {:>14}",
            "All",
            projection.total_revenue(),
            projection.total_cost()
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  ROI: {}",
            color_signed(projection.roi, &format!("{:.1}%", projection.roi))
        )?;
        writeln!(
            self.writer,
            "  Estimated payback: {:.1} years",
            projection.payback_years
        )?;
        Ok(())
    }
}

fn color_score(score: f64, scale: f64) -> ColoredString {
    let text = if scale > 1.0 {
        format!("{score:.1}")
    } else {
        format!("{score:.3}")
    };
    let ratio = score / scale;
    if ratio >= 0.7 {
        text.green()
    } else if ratio >= 0.4 {
        text.yellow()
    } else {
        text.red()
    }
}

fn color_signed(value: f64, text: &str) -> ColoredString {
    if value < 0.0 {
        text.red()
    } else {
        text.green()
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
