mod summary;

#[cfg(test)]
mod tests;

pub(crate) use summary::{print_json_report, print_summary};
