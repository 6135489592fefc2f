// demos/plot_value_curve.rs

//! Plots the option value of the worked HTVI example against volatility
//! for several horizons and writes `htvi_value_curve.svg`.

use std::error::Error;

use htvi_lib::{default_configs, volatility_sweep, zero_vol_limit, OptionInputs, OptionType};
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let config = default_configs::research();
    let base = OptionInputs::new(1000.0, 1000.0, 5.0, config.risk_free_rate, 0.1)?;
    let horizons = [1.0, 3.0, 5.0, 10.0];
    let colors = [RED, BLUE, GREEN, MAGENTA];

    let mut curves = Vec::with_capacity(horizons.len());
    for &t in &horizons {
        let inputs = base.with_years_to_exp(t)?;
        curves.push(volatility_sweep(&inputs, OptionType::Call, &config.sweep.volatilities)?);
    }

    let x_max = config
        .sweep
        .volatilities
        .last()
        .copied()
        .ok_or("empty volatility grid")?;
    let y_max = curves
        .iter()
        .flat_map(|c| c.iter().map(|p| p.1))
        .fold(0.0_f64, f64::max)
        * 1.1;

    let root = SVGBackend::new("htvi_value_curve.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "HTVI call value vs volatility | S = X = 1000",
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max * 100.0, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Volatility (%)")
        .y_desc("Option value")
        .draw()?;

    for ((curve, &t), &color) in curves.iter().zip(horizons.iter()).zip(colors.iter()) {
        let points: Vec<(f64, f64)> = curve.iter().map(|(s, v)| (s * 100.0, *v)).collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(format!("T = {:.0}y", t))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        // Zero-volatility floor for this horizon
        let floor = zero_vol_limit(OptionType::Call, base.spot, base.strike, t, base.rate);
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, floor), (x_max * 100.0, floor)],
            color.stroke_width(1),
        )))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("Chart saved to htvi_value_curve.svg");
    Ok(())
}
