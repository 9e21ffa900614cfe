use anyhow::Result;
use clap::{Args, ValueEnum};
use litho_core::pipeline::config::{BossungParams, PupilParams};
use litho_core::pipeline::Pipeline;
use litho_core::{bossung, mask};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MaskPreset {
    Blank,
    Impulse,
    IsolatedLine,
    LineSpace,
}

#[derive(Args)]
pub struct BossungArgs {
    /// Mask preset to sweep
    #[arg(long, value_enum, default_value = "line-space")]
    pub mask: MaskPreset,

    #[arg(long, default_value = "248")]
    pub wavelength: f64,
    #[arg(long, default_value = "0.75")]
    pub na: f64,
    #[arg(long, default_value = "0.5")]
    pub sigma: f64,

    /// Focus sweep range, um
    #[arg(long, default_value = "-1.0")]
    pub focus_min: f64,
    #[arg(long, default_value = "1.0")]
    pub focus_max: f64,
    /// Number of focus samples, odd, 5..21
    #[arg(long, default_value = "11")]
    pub focus_steps: usize,

    /// Dose sweep range
    #[arg(long, default_value = "0.7")]
    pub dose_min: f64,
    #[arg(long, default_value = "1.3")]
    pub dose_max: f64,
    /// Number of dose samples, 3..9
    #[arg(long, default_value = "7")]
    pub dose_steps: usize,
}

pub fn run(args: &BossungArgs) -> Result<()> {
    let mask = match args.mask {
        MaskPreset::Blank => mask::blank(),
        MaskPreset::Impulse => mask::impulse(),
        MaskPreset::IsolatedLine => mask::isolated_line(6),
        MaskPreset::LineSpace => mask::line_space(10, 5),
    };

    let base_params = PupilParams {
        wavelength_nm: args.wavelength,
        na: args.na,
        sigma: args.sigma,
        ..Default::default()
    };

    let sweep = BossungParams {
        focus_range_um: (args.focus_min, args.focus_max),
        focus_steps: args.focus_steps,
        dose_range: (args.dose_min, args.dose_max),
        dose_steps: args.dose_steps,
    };

    let mut pipeline = Pipeline::new();
    let result = bossung::run_bossung_sweep(&mut pipeline, &mask, &base_params, &sweep)?;

    println!(
        "Bossung sweep: {} pipeline run(s), {:.2} ms",
        result.pipeline_runs, result.time_ms
    );
    print!("{:>10}", "focus(um)");
    for dose in &result.dose_values {
        print!("{dose:>10.2}");
    }
    println!();

    for (f_idx, &focus) in result.focus_values.iter().enumerate() {
        print!("{focus:>10.3}");
        for curve in &result.curves {
            print!("{:>10.1}", curve.points[f_idx].cd_nm);
        }
        println!();
    }

    Ok(())
}
