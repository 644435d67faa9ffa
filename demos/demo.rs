//! Small walkthrough of both containers
//!
//! Run with: cargo run --example demo

use std::time::{SystemTime, UNIX_EPOCH};

use rust_dary_heaps::{DaryHeap, HeapError, IndexedPriorityQueue};

/// Current UTC time as (year, month, day, hour, minute, second)
fn utc_now() -> (i64, i64, i64, i64, i64, i64) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    let (days, rem) = (secs.div_euclid(86_400), secs.rem_euclid(86_400));

    // Days since 1970-01-01 to a proleptic Gregorian date, using Howard
    // Hinnant's civil_from_days algorithm (eras of 146097 days, March-based years)
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    (year, month, day, rem / 3_600, rem % 3_600 / 60, rem % 60)
}

fn main() -> Result<(), HeapError> {
    // Binary min-heap over the letters of a name
    let mut letters = DaryHeap::min(2)?;
    for c in "Dijkstra".chars() {
        letters.push(c);
    }
    print!("min-heap (d=2):");
    while !letters.is_empty() {
        print!(" {}", letters.top()?);
        letters.pop()?;
    }
    println!();

    // 4-ary max-heap over today's date and time fields
    let (year, month, day, hour, minute, second) = utc_now();
    let mut fields = DaryHeap::max(4)?;
    for x in [year, month, day, hour, minute, second] {
        fields.push(x);
    }
    print!("max-heap (d=4):");
    while let Ok(x) = fields.pop_and_return() {
        print!(" {}", x);
    }
    println!();

    // Indexed queue: relax a tentative distance the way Dijkstra would
    let mut distances = IndexedPriorityQueue::build_min(3, vec!["B", "C", "D"], vec![7, 9, 14])?;
    distances.update_key("D", 11)?;
    match distances.update_key("C", 12) {
        Err(err) => println!("rejected C -> 12: {}", err),
        Ok(()) => println!("accepted C -> 12"),
    }
    print!("indexed min-queue (d=3):");
    for (node, dist) in distances.into_sorted_vec() {
        print!(" {}={}", node, dist);
    }
    println!();

    Ok(())
}
