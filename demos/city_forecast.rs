// Forecasts the next 48 hours for a few cities with a small linear model
use demand_owl::forecast::export::to_csv_string;
use demand_owl::forecast::models::LinearModel;
use demand_owl::forecast::utils::parse_start;
use demand_owl::{ForecastConfig, ForecastRequest, Forecaster, WeatherConditions};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("DemandOwl city forecasts");
    println!("========================");

    let mut coefficients = BTreeMap::new();
    coefficients.insert("Temperature".to_string(), 18.0);
    coefficients.insert("Humidity".to_string(), 2.5);
    coefficients.insert("is_weekend".to_string(), -120.0);
    coefficients.insert("Demand_lag_24hr".to_string(), 0.35);
    coefficients.insert("Demand_rolling_mean_24hrs".to_string(), 0.45);
    let model = LinearModel::new(150.0, coefficients)?.with_name("demo linear");

    let forecaster = Forecaster::new(ForecastConfig::default().with_seed(2025))?;
    let start = parse_start("2025-05-16", 9)?;

    let cities = [
        ("Delhi", 1800.0, WeatherConditions::new(38.0, 30.0)),
        ("Kochi", 1200.0, WeatherConditions::new(31.0, 82.0)),
        ("Jaipur", 1400.0, WeatherConditions::new(40.5, 18.0)),
    ];

    for (city, base_demand, weather) in cities {
        let request = ForecastRequest::new(start, base_demand).with_weather(weather);
        let run = forecaster.run(&request, &model)?;

        let predictions = run.predictions();
        let peak = predictions.iter().cloned().fold(f64::MIN, f64::max);
        println!("{}:", city);
        println!("  Base demand: {:.1} Units", base_demand);
        println!("  Peak demand: {:.1} Units", peak);
        if let Some(latest) = run.latest() {
            println!(
                "  At {}: {:.1} Units ({:.1} - {:.1})",
                latest.timestamp(),
                latest.predicted(),
                latest.lower(),
                latest.upper()
            );
        }
    }

    let request = ForecastRequest::new(start, 1800.0).with_horizon(3);
    println!("\nFirst rows as CSV:");
    print!("{}", to_csv_string(&forecaster.run(&request, &model)?)?);

    Ok(())
}
