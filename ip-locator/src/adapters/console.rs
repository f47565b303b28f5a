use std::io::{self, Write};

use ipgeo_rs::LookupError;

use crate::application::services::lookup_service::Report;

pub fn print_report<W: Write>(out: &mut W, report: &Result<Report, LookupError>) -> io::Result<()> {
    let report = match report {
        Ok(report) => report,
        Err(e) => return writeln!(out, "{e}"),
    };

    writeln!(out, "\n=== Detailed IP address information ===")?;
    writeln!(out, "⚠️ Note: IP geolocation gives approximate results")?;
    writeln!(out, "   and usually identifies a city/district, not an exact address.")?;

    writeln!(out, "\nBasic information:")?;
    for (label, value) in report.details.fields() {
        writeln!(out, "{label}: {value}")?;
    }

    writeln!(out, "\nMap links for comparison:")?;
    if let Some(links) = &report.links {
        for (provider, url) in links.iter() {
            writeln!(out, "{provider}: {url}")?;
        }
    }

    if report.details.is_hosting() {
        writeln!(out, "\n⚠️ Warning: this IP belongs to a hosting provider")?;
        writeln!(out, "   and may be used for VPN/proxy.")?;
    }
    Ok(())
}
