use clap::Parser;
use demand_forecast::cli::Cli;
use demand_forecast::export::{to_csv_string, write_csv_file};
use demand_forecast::{ForecastRequest, Forecaster};

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("demand_forecast"), my_code_level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_log();

    let cli = Cli::parse();
    let forecaster = Forecaster::new(cli.load_config()?)?;
    let model = cli.load_model()?;
    let start = cli.start_timestamp()?;
    let weather = cli.base_weather();

    let request = ForecastRequest::new(start, cli.base_demand).with_weather(weather);
    let run = forecaster.run(&request, model.as_ref())?;

    if cli.stdout {
        print!("{}", to_csv_string(&run)?);
        return Ok(());
    }

    let output = cli.output_path();
    write_csv_file(&run, &output)?;

    println!("Electricity Demand Forecast - {} (Next {} Hours)", cli.city, run.horizon());
    println!("==================================================");
    if let Some(latest) = run.latest() {
        println!(
            "  Predicted demand at {}: {:.2} Units (band {:.2} - {:.2})",
            latest.timestamp(),
            latest.predicted(),
            latest.lower(),
            latest.upper()
        );
    }
    println!("  Temperature: {:.1} °C", weather.temperature);
    println!("  Humidity:    {:.1} %", weather.humidity);
    println!("  Model:       {}", model.name());
    println!("  Saved forecast to {}", output.display());

    Ok(())
}
