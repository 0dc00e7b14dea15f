use std::io::{self, Write};

use procuredata_core::{CatalogView, ListingSource};
use procuredata_model::Listing;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ListingsReport<'a> {
    source: ListingSource,
    total: usize,
    shown: usize,
    listings: &'a [Listing],
}

#[derive(Debug, Serialize)]
struct CategoriesReport<'a> {
    source: ListingSource,
    categories: &'a [String],
}

pub fn print_listings(
    out: &mut impl Write,
    view: &CatalogView,
    json: bool,
) -> io::Result<()> {
    if json {
        let report = ListingsReport {
            source: view.source,
            total: view.total,
            shown: view.listings.len(),
            listings: &view.listings,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        return writeln!(out);
    }

    writeln!(
        out,
        "id\tname\tprovider\tcategory\tprice\tcurrency\tpricing\tgreen\tverified\treputation\treviews"
    )?;
    for listing in &view.listings {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{:.2}\t{}\t{}\t{}\t{}\t{:.1}\t{}",
            listing.id,
            listing.name,
            listing.provider_name,
            listing.category,
            listing.price,
            listing.currency,
            listing.pricing_model,
            yes_no(listing.has_green_badge),
            yes_no(listing.kyb_verified),
            listing.reputation_score,
            listing.review_count,
        )?;
    }
    Ok(())
}

pub fn print_categories(
    out: &mut impl Write,
    view: &CatalogView,
    json: bool,
) -> io::Result<()> {
    if json {
        let report = CategoriesReport {
            source: view.source,
            categories: &view.categories,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        return writeln!(out);
    }

    for category in &view.categories {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
