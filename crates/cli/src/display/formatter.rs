//! Human-readable output for classpath resolutions

use pants_classpath_core::{ClasspathResolution, EntryKind};

pub fn print_resolution(module: &str, resolution: &ClasspathResolution) {
    println!("🔍 Classpath for module: {module}");
    println!("{}", "=".repeat(80));

    match resolution {
        ClasspathResolution::Manifest { path } => {
            println!("📦 Manifest jar governs this session:");
            println!("   {}", path.display());
        }
        ClasspathResolution::Published { entries, excludes } => {
            if entries.is_empty() {
                println!("❌ No classpath entries published (targets may not be built yet).");
            } else {
                println!("✅ Found {} classpath entr{}:\n", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
                for (i, entry) in entries.iter().enumerate() {
                    let tag = match entry.kind {
                        EntryKind::Directory => "📁",
                        EntryKind::Jar => "📄",
                    };
                    println!("{}. {} {}", i + 1, tag, entry.path.display());
                }
            }

            if !excludes.is_empty() {
                println!("\n🚫 Library exclusions on the runtime closure:");
                for (exclude, origin) in excludes {
                    println!("   • {exclude} (declared by {origin})");
                }
            }
        }
    }

    println!("{}", "=".repeat(80));
}
