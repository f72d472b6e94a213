//! Decodes a raw index table and renders its entries with known names
//!
//! Reads a file containing a contiguous run of 12-byte index records (as
//! extracted from a MIX archive header) and prints each entry, resolving
//! hashes through the standard name catalog where possible.

use std::env;
use std::fs;

use cnc_mix::{NameRegistry, PackageEntry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <index-table.bin>", args[0]);
        std::process::exit(1);
    }

    let table_path = &args[1];
    println!("=== Index Table Listing ===");
    println!("Table: {table_path}");

    let data = fs::read(table_path)?;
    if data.len() % PackageEntry::SIZE != 0 {
        eprintln!(
            "warning: {} trailing bytes ignored (records are {} bytes)",
            data.len() % PackageEntry::SIZE,
            PackageEntry::SIZE
        );
    }

    let names = NameRegistry::with_standard_names();

    let count = data.len() / PackageEntry::SIZE;
    println!("\n{count} entries:");
    for (i, record) in data.chunks_exact(PackageEntry::SIZE).enumerate() {
        let entry = PackageEntry::from_bytes(record)?;
        println!("  {}: {}", i + 1, entry.display(&names));
    }

    Ok(())
}
