use anyhow::Result;
use convo_core::NlpProcessor;
use tracing::debug;

use crate::output;

pub fn execute(text: &str) -> Result<()> {
    let processor = NlpProcessor::new();
    let label = processor.sentiment(Some(text));
    debug!("Classified {} chars as {}", text.chars().count(), label);

    output::print_info(&processor.process_message(Some(text)));
    println!("{}", label);

    Ok(())
}
