use std::time::Instant;

use edgecubes::{
    enumerator::{self, SUBSET_COUNT},
    report,
};

use crate::{build_group, finish_bar, make_bar, EnumerateOpts};

fn exit(msg: &str) -> ! {
    println!("{msg}");
    std::process::exit(1);
}

pub fn enumerate(opts: &EnumerateOpts) {
    let parallel = !opts.no_parallelism;

    if let (true, Some(threads)) = (parallel, opts.threads) {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            exit(&format!("Failed to set up {threads} threads. Error: {e}"));
        }
    }

    let start = Instant::now();

    let group = build_group();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = report::write_universe(&mut stdout)
        .and_then(|_| report::write_group(&mut stdout, &group))
    {
        exit(&format!("Failed to write report. Error: {e}"));
    }
    drop(stdout);

    let bar = make_bar(SUBSET_COUNT as u64, opts.no_progress);
    bar.set_message("subsets classified");

    if !parallel {
        bar.println("Running single threaded");
    }

    let result = if parallel {
        enumerator::enumerate_rayon(&group, &bar)
    } else {
        enumerator::enumerate(&group, &bar)
    };

    let result = match result {
        Ok(r) => r,
        Err(e) => {
            bar.abandon();
            exit(&format!("Error: {e}"));
        }
    };

    finish_bar(&bar, start.elapsed(), result.solutions().len());

    let mut stdout = std::io::stdout().lock();
    if let Err(e) =
        report::write_enumeration(&mut stdout, &group, &result, !opts.summary_only)
    {
        exit(&format!("Failed to write report. Error: {e}"));
    }

    println!("Duration: {} ms", start.elapsed().as_millis());
}
