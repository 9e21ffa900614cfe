use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use image::{GrayImage, Luma};
use litho_core::pipeline::config::PupilParams;
use litho_core::pipeline::Pipeline;
use litho_core::{cd, mask};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MaskPreset {
    Blank,
    Impulse,
    IsolatedLine,
    LineSpace,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Mask preset to simulate
    #[arg(long, value_enum, default_value = "isolated-line")]
    pub mask: MaskPreset,

    /// Illumination wavelength, nm (193..365)
    #[arg(long, default_value = "248")]
    pub wavelength: f64,

    /// Numerical aperture (0.1..1.4)
    #[arg(long, default_value = "0.75")]
    pub na: f64,

    /// Partial coherence factor (0..1)
    #[arg(long, default_value = "0.5")]
    pub sigma: f64,

    /// Defocus, um (-2..2)
    #[arg(long, default_value = "0.0")]
    pub defocus: f64,

    /// Dose used for the printed CD measurement
    #[arg(long, default_value = "1.0")]
    pub dose: f64,

    /// PNG output path for the normalized aerial image
    #[arg(short, long, default_value = "aerial_image.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mask = match args.mask {
        MaskPreset::Blank => mask::blank(),
        MaskPreset::Impulse => mask::impulse(),
        MaskPreset::IsolatedLine => mask::isolated_line(6),
        MaskPreset::LineSpace => mask::line_space(10, 5),
    };

    let params = PupilParams {
        wavelength_nm: args.wavelength,
        na: args.na,
        sigma: args.sigma,
        defocus_um: args.defocus,
        ..Default::default()
    };

    let mut pipeline = Pipeline::new();
    let output = pipeline.run(&mask, &params);
    let cd_nm = cd::measure_cd(&output.intensity, args.dose);

    println!("Pipeline run in {:.3} ms", output.time_ms);
    println!("CD at dose={}: {:.1} nm", args.dose, cd_nm);

    let (height, width) = output.intensity.dim();
    let mut img = GrayImage::new(width as u32, height as u32);
    for r in 0..height {
        for c in 0..width {
            let v = (output.intensity[[r, c]].clamp(0.0, 1.0) * 255.0).round() as u8;
            img.put_pixel(c as u32, r as u32, Luma([v]));
        }
    }
    img.save(&args.output)?;
    println!("Aerial image saved to {}", args.output.display());

    Ok(())
}
