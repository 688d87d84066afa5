//! Ranking throughput benchmark.
//!
//! Measures each stage of the pipeline on a text file:
//!
//! 1. **Normalize**: lowercasing into a reused buffer
//! 2. **Tokenize**: word splitting over pre-lowered text
//! 3. **Analyze**: the full pipeline, counting and top-N ranking included
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/rank_bench /path/to/corpus.txt
//! ./target/release/rank_bench /path/to/corpus.txt ascii
//! ```
//!
//! Build with `--release`. Use an input of at least a few MiB for stable numbers.

use std::env;
use std::fs;
use std::process;
use std::time::{Duration, Instant};

use wordrank_core::analyzer::{TextNormalizer, WordTokenizer};
use wordrank_core::{Analyzer, AnalyzerConfig, WordClass};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() {
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1) else {
        eprintln!("Usage: rank_bench <path> [unicode|ascii]");
        process::exit(1);
    };

    let config = match args.get(2).map(String::as_str) {
        Some("ascii") => AnalyzerConfig::ascii(),
        _ => AnalyzerConfig::default(),
    };

    println!("Loading file...");
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read {path}: {err}");
            process::exit(1);
        }
    };
    let input = match std::str::from_utf8(&bytes) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{path} is not valid UTF-8 (valid up to byte {})", err.valid_up_to());
            process::exit(1);
        }
    };

    println!("File size:  {}", fmt_bytes(input.len() as u64));
    println!("Word class: {:?}\n", config.word_class);

    bench_normalize(input);
    bench_tokenize(input, config.min_token_len, config.word_class);
    bench_analyze(input, config);
}

fn bench_normalize(input: &str) {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(input, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(input, &mut out));

    print_perf("Normalize", input.len(), elapsed, 0);
}

fn bench_tokenize(input: &str, min_len: usize, class: WordClass) {
    let normalized = TextNormalizer::new().normalize(input);
    let tokenizer = WordTokenizer::new(min_len, class);

    println!("=== Tokenize ===");

    warmup(|| {
        std::hint::black_box(tokenizer.count(&normalized));
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = tokenizer.count(&normalized) as u64;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", normalized.len(), elapsed, tokens);
}

fn bench_analyze(input: &str, config: AnalyzerConfig) {
    let analyzer = Analyzer::with_config(config);

    println!("=== Analyze (top {}) ===", config.top_n);

    warmup(|| {
        std::hint::black_box(analyzer.analyze(input));
    });

    let mut last = None;
    let elapsed = measure(|| {
        last = Some(std::hint::black_box(analyzer.analyze(input)));
    });

    let tokens = last.as_ref().map_or(0, |a| a.total_tokens);
    print_perf("Analyze", input.len(), elapsed, tokens);

    if let Some(analysis) = last {
        println!("Result      : {analysis}\n");
    }
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {label}");
    println!("Elapsed     : {secs:.3} s");
    println!("Throughput  : {:.1} MiB/s", mib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    match b {
        b if b >= GIB => format!("{:.2} GiB", b as f64 / GIB as f64),
        b if b >= MIB => format!("{:.2} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.2} KiB", b as f64 / KIB as f64),
        b => format!("{b} B"),
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out
}
