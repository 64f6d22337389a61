use noasacrypto_api::types::Category;

use crate::output::{print_categories, OutputFormat};

pub fn run(format: &OutputFormat) {
    print_categories(&Category::ALL, format);
}
