#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

use chaintable::{ChainStats, HashTable, logger::initialize_logger};
use log::info;
use plotters::prelude::*;
use rand::Rng;

// Number of random keys inserted in total
const TOTAL_KEYS: usize = 200_000;
// Stats are sampled after every CHECKPOINT inserts
const CHECKPOINT: usize = 5_000;
// Random keys are drawn from 0..KEY_SPACE, so some inserts are overwrites
const KEY_SPACE: u64 = 1_000_000;

/// One sample taken while filling the table
struct Sample {
    inserted: usize,
    stats: ChainStats,
    load_factor: f64,
    mean_chain: f64,
}

/// Plotted line: legend label, colour and the value it reads from a sample
type Series = (&'static str, RGBColor, fn(&Sample) -> f64);

fn sample(table: &HashTable<u64, u64>, inserted: usize) -> Sample {
    let stats = table.stats();
    let mean_chain = if stats.occupied_buckets == 0 {
        0.0
    } else {
        stats.items as f64 / stats.occupied_buckets as f64
    };

    Sample { inserted, stats, load_factor: table.load_factor(), mean_chain }
}

fn fill_table() -> Vec<Sample> {
    let mut rng = rand::rng();
    let mut table = HashTable::new();
    let mut samples = Vec::with_capacity(TOTAL_KEYS / CHECKPOINT);

    for inserted in 1..=TOTAL_KEYS {
        let key = rng.random_range(0..KEY_SPACE);
        table.insert(key, key);

        if inserted % CHECKPOINT == 0 {
            let sample = sample(&table, inserted);
            info!(
                "{} inserts: {} items, capacity {}, occupied {}, longest chain {}",
                inserted,
                sample.stats.items,
                sample.stats.capacity,
                sample.stats.occupied_buckets,
                sample.stats.longest_chain
            );
            samples.push(sample);
        }
    }

    samples
}

fn plot_growth(samples: &[Sample]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("chain_growth.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_x = samples.last().map_or(1, |s| s.inserted);
    let max_y = samples.iter().map(|s| s.stats.capacity).max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Table Growth While Inserting Random Keys", ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Inserts")
        .y_desc("Count")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    let series: [Series; 3] = [
        ("Capacity", RGBColor(220, 50, 50), |s| s.stats.capacity as f64),
        ("Occupied buckets", RGBColor(50, 90, 220), |s| s.stats.occupied_buckets as f64),
        ("Items", RGBColor(50, 180, 50), |s| s.stats.items as f64),
    ];

    for (label, color, value) in series {
        let style = ShapeStyle::from(&color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(samples.iter().map(|s| (s.inserted, value(s))), style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_chains(samples: &[Sample]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_x = samples.last().map_or(1, |s| s.inserted);
    let max_y = samples
        .iter()
        .map(|s| s.stats.longest_chain as f64)
        .fold(1.0, f64::max) *
        1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Length and Load Factor", ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Inserts")
        .y_desc("Nodes per chain / load factor")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    let series: [Series; 3] = [
        ("Longest chain", RGBColor(180, 50, 180), |s| s.stats.longest_chain as f64),
        ("Mean chain", RGBColor(50, 90, 220), |s| s.mean_chain),
        ("Load factor", RGBColor(220, 50, 50), |s| s.load_factor),
    ];

    for (label, color, value) in series {
        let style = ShapeStyle::from(&color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(samples.iter().map(|s| (s.inserted, value(s))), style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    // growth triggers above this load factor
    let threshold_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(vec![(0, 0.5), (max_x, 0.5)], threshold_style))?
        .label("Growth threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    let samples = fill_table();
    plot_growth(&samples)?;
    plot_chains(&samples)?;

    info!("Generated plot images: chain_growth.png, chain_lengths.png");

    Ok(())
}
