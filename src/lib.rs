use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Read, Seek, Write},
};

use log::info;
use mmu::{BackingStore, Stats, Translator};

pub mod config;
pub mod error;
pub mod input;
pub mod report;

pub use config::{AddressSource, SimConfig};
pub use error::{Result, SimError};

use input::AddressReader;

/// Feeds every address in `addresses` through `translator`, writing one
/// record per address (unless `summary_only`) followed by the summary.
///
/// Stops at the first failed translation; records already written stay in
/// `out` and no summary is written.
pub fn run<S, R, W>(
    translator: &mut Translator<S>,
    addresses: R,
    out: &mut W,
    summary_only: bool,
) -> Result<Stats>
where
    S: Read + Seek,
    R: BufRead,
    W: Write,
{
    for (index, address) in AddressReader::new(addresses).enumerate() {
        let address = address?;
        let translation = translator
            .translate(address)
            .map_err(|source| SimError::Translation {
                line: index + 1,
                source,
            })?;
        if !summary_only {
            report::write_translation(out, &translation)?;
        }
    }

    let stats = translator.stats();
    report::write_summary(out, &stats)?;
    out.flush()?;
    Ok(stats)
}

/// Opens the inputs named by `config` and runs a fresh translator over them,
/// reporting to stdout.
pub fn simulate(config: &SimConfig) -> Result<Stats> {
    let backing_store =
        BackingStore::<File>::open(&config.backing_store).map_err(|source| {
            SimError::BackingStore {
                path: config.backing_store.clone(),
                source,
            }
        })?;
    let addresses: Box<dyn BufRead> = match &config.addresses {
        AddressSource::Stdin => Box::new(io::stdin().lock()),
        AddressSource::File(path) => {
            let file = File::open(path).map_err(|source| SimError::AddressStream {
                path: path.clone(),
                source,
            })?;
            Box::new(BufReader::new(file))
        }
    };

    info!(
        "Translating with {} frame(s) over backing store {}",
        config.frames,
        backing_store.name()
    );
    let mut translator = Translator::with_frames(backing_store, config.frames);
    let mut out = BufWriter::new(io::stdout().lock());
    let result = run(&mut translator, addresses, &mut out, config.summary_only);
    out.flush()?;

    let stats = result?;
    info!(
        "Done: {} addresses, {} page faults, {} TLB hits",
        stats.translated, stats.page_faults, stats.tlb_hits
    );
    Ok(stats)
}
