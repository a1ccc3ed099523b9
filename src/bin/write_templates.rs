// Small dev utility: write the five import templates to a directory.
//
// Usage:
//   cargo run --bin write_templates -- [out_dir] [config.json]
//
// Files are named the same way the RPC layer names them (<domain>_template.xlsx).

use anyhow::Context;
use std::path::PathBuf;
use tire_erp_interchange::api::template_filename;
use tire_erp_interchange::{generate_template, logging, Domain, InterchangeConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "templates".to_string()));
    let config = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            InterchangeConfig::from_json(&raw).with_context(|| format!("parsing config {}", path))?
        }
        None => InterchangeConfig::default(),
    };

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for domain in Domain::ALL {
        let bytes = generate_template(domain, &config)?;
        let path = out_dir.join(template_filename(domain));
        std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        info!(domain = %domain, path = %path.display(), bytes = bytes.len(), "模板已写出");
    }

    println!("wrote {} templates to {}", Domain::ALL.len(), out_dir.display());
    Ok(())
}
