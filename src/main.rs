//! # tweetpack CLI
//!
//! Command-line interface for the tweetpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use tweetpack::cli::Args;
use tweetpack::core::{ArchiveStats, apply_filters};
use tweetpack::format::{OutputFormat, write_to_format};
use tweetpack::{Archive, TweetpackError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tweetpack=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), TweetpackError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    println!("📦 tweetpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.archive.display());
    if args.check {
        println!("🔎 Mode:    Check only");
    } else {
        println!("💾 Output:  {}", output_path);
        println!("📄 Format:  {}", format);
    }

    let filter_config = args.filter_config()?;
    if let Some(after) = &args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(before) = &args.before {
        println!("📅 Before:  {}", before);
    }
    if args.no_replies {
        println!("💬 Replies: excluded");
    }
    println!();

    // Step 1: Load and decode every record
    println!("⏳ Decoding tweets...");
    let decode_start = Instant::now();
    let config = args.archive_config();
    let archive = if args.archive.is_dir() {
        Archive::open_with(&args.archive, &config)?
    } else {
        Archive::from_path_with(&args.archive, &config)?
    };
    let tweets = archive.tweets()?;
    let original_count = tweets.len();
    println!(
        "   Decoded {} tweets ({:.2}s)",
        original_count,
        decode_start.elapsed().as_secs_f64()
    );

    // Step 2: Filter
    let tweets = if filter_config.is_active() {
        println!("🔍 Filtering tweets...");
        let filtered = apply_filters(tweets, &filter_config);
        println!("   {} tweets after filtering", filtered.len());
        filtered
    } else {
        tweets
    };

    let stats = ArchiveStats::collect(&tweets);

    // Step 3: Write
    if args.check {
        println!();
        println!("✅ Archive is valid");
    } else {
        println!("💾 Writing {}...", format);
        let write_start = Instant::now();
        write_to_format(&tweets, &output_path, format, &args.output_config())?;
        println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());
        println!();
        println!("✅ Done! Output saved to {}", output_path);
    }

    println!();
    println!("📊 Summary:");
    println!("   Tweets:    {}", original_count);
    if filter_config.is_active() {
        println!("   Kept:      {}", stats.total);
    }
    println!(
        "   Replies:   {} ({:.1}%)",
        stats.replies,
        stats.reply_ratio()
    );
    println!("   Retweets:  {}", stats.retweets);
    println!(
        "   Media:     {} photos, {} GIFs, {} videos",
        stats.photos, stats.animated_gifs, stats.videos
    );
    if let (Some(first), Some(last)) = (stats.first, stats.last) {
        println!(
            "   Span:      {} to {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }

    let total_time = total_start.elapsed();
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let per_sec = original_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} tweets/sec", per_sec);

    Ok(())
}
