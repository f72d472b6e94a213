//! Demonstrates the two filename hash algorithms used by MIX archives
//!
//! This example shows how the same filename maps to different index keys
//! depending on the archive's format generation, and how case folding and
//! padding behave.

use cnc_mix::{PackageHashType, hash_filename};

fn main() {
    println!("=== MIX Hash Algorithms Demo ===\n");

    let test_files = vec![
        "conquer.mix",
        "local.mix",
        "e1.shp",
        "temperat.mix",
        "redalert.mix",
    ];

    for filename in &test_files {
        println!("File: {}", filename);
        println!("{}", "-".repeat(50));

        let classic = hash_filename(filename, PackageHashType::Classic);
        let crc32 = hash_filename(filename, PackageHashType::Crc32);

        println!("  Classic (TD/RA): 0x{:08X}", classic);
        println!("  CRC32 (TS):      0x{:08X}", crc32);
        println!();
    }

    // Demonstrate case folding
    println!("=== Case Folding ===");
    println!("Both algorithms uppercase the name first:");
    println!();

    let variations = vec!["conquer.mix", "CONQUER.MIX", "Conquer.Mix"];

    for generation in [PackageHashType::Classic, PackageHashType::Crc32] {
        println!("{} hash for case variations:", generation);
        for name in &variations {
            println!("  {:16} -> 0x{:08X}", name, hash_filename(name, generation));
        }
        println!();
    }

    // Demonstrate the padding difference between generations
    println!("=== Padding ===");
    println!("Names whose length is not a multiple of four get padded before");
    println!("hashing: Classic appends NUL bytes, CRC32 appends a residue");
    println!("count byte and copies of the last partial word's first byte.");
    println!();

    for name in ["a", "ab", "abc", "abcd"] {
        println!(
            "  {:4} (len {}) -> classic 0x{:08X}, crc32 0x{:08X}",
            name,
            name.len(),
            hash_filename(name, PackageHashType::Classic),
            hash_filename(name, PackageHashType::Crc32)
        );
    }
}
