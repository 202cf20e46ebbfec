use anyhow::Result;
use clap::Parser;

use rsf_core::{ObserverSite, SezVector, sez_to_ecef};

#[derive(Parser)]
#[command(name = "sez2ecef")]
#[command(about = "Convert a South-East-Zenith offset at a ground site to an ECEF position")]
struct Cli {
    /// Observer geodetic latitude (degrees)
    #[arg(allow_negative_numbers = true)]
    o_lat_deg: f64,

    /// Observer geodetic longitude (degrees)
    #[arg(allow_negative_numbers = true)]
    o_lon_deg: f64,

    /// Observer height above the reference ellipsoid (km)
    #[arg(allow_negative_numbers = true)]
    o_hae_km: f64,

    /// South component of the offset (km)
    #[arg(allow_negative_numbers = true)]
    s_km: f64,

    /// East component of the offset (km)
    #[arg(allow_negative_numbers = true)]
    e_km: f64,

    /// Zenith component of the offset (km)
    #[arg(allow_negative_numbers = true)]
    z_km: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let site = ObserverSite::new(cli.o_lat_deg, cli.o_lon_deg, cli.o_hae_km)?;
    let sez = SezVector::new(cli.s_km, cli.e_km, cli.z_km);

    log::debug!(
        "site lat {} deg, lon {} deg, height {} km; offset range {} km",
        site.latitude_deg,
        site.longitude_deg,
        site.height_km,
        sez.range_km()
    );

    let ecef = sez_to_ecef(&site, &sez);

    println!("{}", ecef.x);
    println!("{}", ecef.y);
    println!("{}", ecef.z);

    Ok(())
}
