use anyhow::{Context, Result};
use bench_graphs::data::model::BenchmarkRow;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// (domain, number of problems, base plan length, SAT blow-up factor)
const DOMAINS: [(&str, u32, f64, f64); 4] = [
    ("blocksworld", 10, 6.0, 1.6),
    ("depots", 8, 10.0, 2.2),
    ("gripper", 10, 11.0, 1.3),
    ("logistics", 6, 20.0, 2.8),
];

/// Seconds, rounded to the millisecond like the benchmark harness prints them.
fn round_ms(t: f64) -> f64 {
    (t * 1000.0).round() / 1000.0
}

fn sample_rows(seed: u64) -> Vec<BenchmarkRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::new();

    for (domain, n_problems, base_len, sat_factor) in DOMAINS {
        for p in 1..=n_problems {
            let scale = f64::from(p);
            let plan_len = (base_len + 2.0 * scale).round();

            // HSP grows roughly linearly with the instance, SAT encodes one
            // layer per step and blows up faster.
            let hsp_temps = round_ms(0.05 * scale * rng.gen_range(0.8..1.2));
            let sat_temps = round_ms(0.02 * scale.powf(sat_factor) * rng.gen_range(0.8..1.2));
            let hsp_taille = plan_len + (rng.gen_range(0.0..0.35) * plan_len).round();

            rows.push(BenchmarkRow {
                domain: domain.to_string(),
                n_problem: scale,
                sat_temps,
                hsp_temps,
                sat_taille: plan_len,
                hsp_taille,
            });
        }
    }
    rows
}

fn main() -> Result<()> {
    let output_path = "resultats.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let rows = sample_rows(42);
    for row in &rows {
        writer.serialize(row).context("writing sample row")?;
    }
    writer.flush().context("flushing sample file")?;

    println!(
        "Wrote {} benchmark rows ({} domains) to {output_path}",
        rows.len(),
        DOMAINS.len()
    );
    Ok(())
}
