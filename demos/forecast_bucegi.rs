use chrono::{Duration, Local};
use massif_forecast::{ForecastError, Forecaster};

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    let forecaster = Forecaster::new()?;
    let date = Local::now().date_naive() + Duration::days(1);

    let advisory = forecaster
        .advise()
        .massif("bucegi")
        .date(date)
        .altitude(2200)
        .call()
        .await?;

    let forecast = &advisory.forecast;
    println!(
        "Bucegi at {}m on {} ({}):",
        forecast.altitude, forecast.date, forecast.condition
    );
    for factor in &advisory.risk.factors {
        println!(
            "  [{:>6}] {:<30} {:>10}  {}",
            factor.tier, factor.label, factor.display_value, factor.remark
        );
    }
    if let Some(avalanche) = &advisory.risk.avalanche {
        println!(
            "  [{:>6}] {:<30} {}  {}",
            avalanche.tier(),
            "Avalanche risk",
            avalanche.display_value(),
            avalanche.remark()
        );
    }
    println!(
        "\n{} ({}): {}",
        advisory.risk.overall.status_text, advisory.risk.overall.tier, advisory.risk.overall.summary
    );

    let categories: Vec<&str> = advisory
        .checklist
        .categories
        .iter()
        .map(|c| c.title())
        .collect();
    println!("Pack: {}", categories.join(", "));

    Ok(())
}
