// src/output.rs
use std::fs::File;
use std::io::{self, Write};

use crate::sweep::SweepRecord;

/// Write one scenario's comparison table as CSV.
///
/// Fixed-point with 16 fractional digits, matching the precision the
/// error columns need at the cancellation-dominated end of the sweep.
pub fn write_sweep_to_csv(filename: &str, records: &[SweepRecord]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(
        file,
        "h_rel,h,\
         Delta_analytic,Delta_fd,Delta_cs,\
         err_D_fd,err_D_cs,\
         Gamma_analytic,Gamma_fd,Gamma_cs_real,Gamma_cs_45,\
         err_G_fd,err_G_cs_real,err_G_cs_45"
    )?;
    for rec in records {
        writeln!(
            file,
            "{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16},{:.16}",
            rec.h_rel,
            rec.h,
            rec.delta_analytic,
            rec.delta_fd,
            rec.delta_cs,
            rec.err_d_fd,
            rec.err_d_cs,
            rec.gamma_analytic,
            rec.gamma_fd,
            rec.gamma_cs_real,
            rec.gamma_cs_45,
            rec.err_g_fd,
            rec.err_g_cs_real,
            rec.err_g_cs_45
        )?;
    }
    Ok(())
}
