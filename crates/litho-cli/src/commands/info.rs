use anyhow::Result;
use clap::Args;
use litho_core::consts::{FIELD_OF_VIEW_UM, FREQ_SPACING, N, PIXEL_SIZE_NM};
use litho_core::{PupilParams, ViewParams};

#[derive(Args)]
pub struct InfoArgs {}

pub fn run(_args: &InfoArgs) -> Result<()> {
    println!("Grid");
    println!("  N:             {N}");
    println!("  pixel size:    {PIXEL_SIZE_NM:.5} nm");
    println!("  field of view: {FIELD_OF_VIEW_UM:.3} um");
    println!("  delta f:       {FREQ_SPACING:.6} cycles/nm");
    println!();

    let params = PupilParams::default();
    let view = ViewParams::default();
    println!("Default optical parameters");
    println!("  wavelength:        {} nm", params.wavelength_nm);
    println!("  NA:                {}", params.na);
    println!("  sigma:             {}", params.sigma);
    println!("  defocus:           {} um", params.defocus_um);
    println!("  Zernike Z4..Z11:   {:?}", params.zernike.0);
    println!();
    println!("Default view parameters");
    println!("  threshold:         {}", view.threshold);
    println!("  crossSectionRow:   {}", view.cross_section_row);

    Ok(())
}
