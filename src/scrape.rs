// src/scrape.rs
use std::{
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
    thread,
};

use tracing::{debug, info};

use crate::{
    config::options::{ FetchParams, ScrapeOptions },
    core::net::{ Fetcher, Transport },
    data::{ DeputyRecord, DeputyRef },
    progress::{ NullProgress, Progress },
    specs::{ detail, listing },
};

/// Top-level: index every selected region, then fetch every deputy's details.
/// Never fails; unreachable pages show up as empty regions or bare records.
pub fn run<T: Transport>(
    fetcher: &Fetcher<T>,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<DeputyRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Collecting deputies…");
    }
    let refs = collect_references(fetcher, &opts.regions, &opts.fetch);
    info!(total = refs.len(), "deputies found");

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching details…");
    }
    fetch_records(fetcher, &refs, opts.concurrent(), opts.workers, &opts.fetch, progress)
}

/// Flatten the per-region indexes, region order first, then page order.
pub fn collect_references<T: Transport>(
    fetcher: &Fetcher<T>,
    regions: &[String],
    params: &FetchParams,
) -> Vec<DeputyRef> {
    let mut refs = Vec::new();
    for region in regions {
        let found = listing::index(fetcher, region, params);
        refs.extend(found.into_iter().map(|(name, url)| DeputyRef {
            name,
            url,
            region: region.clone(),
        }));
    }
    refs
}

/// One record per reference. Sequential mode keeps input order; concurrent
/// mode returns records in completion order.
pub fn fetch_records<T: Transport>(
    fetcher: &Fetcher<T>,
    refs: &[DeputyRef],
    concurrent: bool,
    max_workers: usize,
    params: &FetchParams,
    progress: Option<&mut dyn Progress>,
) -> Vec<DeputyRecord> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    progress.begin(refs.len());

    let records = if concurrent {
        fetch_pooled(fetcher, refs, max_workers, params, &mut *progress)
    } else {
        debug!("running sequentially");
        let mut records = Vec::with_capacity(refs.len());
        for r in refs {
            let record = detail::extract(fetcher, r, params);
            progress.item_done(&record);
            records.push(record);
        }
        records
    };

    progress.finish();
    records
}

fn fetch_pooled<T: Transport>(
    fetcher: &Fetcher<T>,
    refs: &[DeputyRef],
    max_workers: usize,
    params: &FetchParams,
    progress: &mut dyn Progress,
) -> Vec<DeputyRecord> {
    let workers = max_workers.min(refs.len()).max(1);
    debug!(workers, "running on worker pool");

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<DeputyRecord>();

    thread::scope(|scope| {
        // Spawn workers
        for _ in 0..workers {
            let idx = &counter;
            let tx = res_tx.clone();

            scope.spawn(move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    let Some(reference) = refs.get(i) else {
                        break;
                    };
                    let record = detail::extract(fetcher, reference, params);
                    if tx.send(record).is_err() {
                        break;
                    }
                }
            });
        }
        drop(res_tx); // this thread is sole receiver now

        // Aggregate results
        let mut records = Vec::with_capacity(refs.len());
        for _ in 0..refs.len() {
            match res_rx.recv() {
                Ok(record) => {
                    progress.item_done(&record);
                    records.push(record);
                }
                Err(_) => break, // workers ended early; scope join reports the panic
            }
        }
        records
    })
}
