use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use launch_dash::data::model::{
    COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS, KNOWN_SITES,
};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations flown in order, with their payload envelope and
/// landing success rate.
const BOOSTERS: [(&str, usize, f64, f64, f64); 5] = [
    ("v1.0", 5, 0.0, 700.0, 0.0),
    ("v1.1", 15, 500.0, 4500.0, 0.15),
    ("FT", 24, 2000.0, 9600.0, 0.65),
    ("B4", 11, 2000.0, 7000.0, 0.55),
    ("B5", 1, 3600.0, 15600.0, 1.0),
];

struct Row {
    site: &'static str,
    payload: f64,
    booster: &'static str,
    class: i64,
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut rows = Vec::new();

    for &(booster, launches, low, high, success_rate) in &BOOSTERS {
        for _ in 0..launches {
            let payload = rng.uniform(low, high).round();
            rows.push(Row {
                site: *rng.pick(&KNOWN_SITES),
                payload,
                booster,
                class: i64::from(rng.next_f64() < success_rate),
            });
        }
    }

    // CSV
    let csv_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV output")?;
    writer.write_record(["Flight Number", COL_LAUNCH_SITE, COL_CLASS, COL_PAYLOAD_MASS, COL_BOOSTER_CATEGORY])?;
    for (i, row) in rows.iter().enumerate() {
        writer.write_record([
            (i + 1).to_string(),
            row.site.to_string(),
            row.class.to_string(),
            row.payload.to_string(),
            row.booster.to_string(),
        ])?;
    }
    writer.flush().context("flushing CSV output")?;

    // Parquet
    let schema = Arc::new(Schema::new(vec![
        Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
        Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
        Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
        Field::new(COL_CLASS, DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(rows.iter().map(|r| r.site).collect::<Vec<_>>())),
            Arc::new(Float64Array::from(rows.iter().map(|r| r.payload).collect::<Vec<_>>())),
            Arc::new(StringArray::from(rows.iter().map(|r| r.booster).collect::<Vec<_>>())),
            Arc::new(Int64Array::from(rows.iter().map(|r| r.class).collect::<Vec<_>>())),
        ],
    )
    .context("building record batch")?;

    let parquet_path = "spacex_launch_dash.parquet";
    let file = File::create(parquet_path).context("creating parquet output")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;

    println!("Wrote {} launches to {csv_path} and {parquet_path}", rows.len());
    Ok(())
}
