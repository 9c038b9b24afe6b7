use clap::Args;

use crate::error::Result;
use crate::sort::criteria;

/// List the sorting criteria
#[derive(Args, Debug)]
pub struct CriteriaArgs {}

pub fn run(_args: CriteriaArgs) -> Result<()> {
    for name in criteria::names() {
        println!("{}", name);
    }
    Ok(())
}
