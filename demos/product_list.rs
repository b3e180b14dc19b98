// Example: a filtered, sorted product catalogue behind a virtual list.
//
// Filtering and sorting happen here, upstream of the list; the list only ever sees the
// finished sequence and re-derives its window when that sequence is replaced.
use listwindow::{Align, ReplacePolicy, ScrollSession, VirtualList, Window, WindowOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Category {
    Electronics,
    Books,
    Clothing,
    Food,
    Toys,
}

const CATEGORIES: [Category; 5] = [
    Category::Electronics,
    Category::Books,
    Category::Clothing,
    Category::Food,
    Category::Toys,
];

#[derive(Clone, Debug)]
struct Product {
    id: u32,
    name: String,
    category: Category,
    price_cents: u32,
    stock: u32,
}

fn generate(count: u32) -> Vec<Product> {
    let mut seed = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };
    (1..=count)
        .map(|id| Product {
            id,
            name: format!("Product {id}"),
            category: CATEGORIES[id as usize % CATEGORIES.len()],
            price_cents: (next() % 100_000) as u32,
            stock: (next() % 500) as u32,
        })
        .collect()
}

fn filter_and_sort(all: &[Product], search: &str, category: Option<Category>) -> Vec<Product> {
    let search = search.to_lowercase();
    let mut out: Vec<Product> = all
        .iter()
        .filter(|p| search.is_empty() || p.name.to_lowercase().contains(&search))
        .filter(|p| category.is_none_or(|c| p.category == c))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.price_cents.cmp(&a.price_cents).then(a.id.cmp(&b.id)));
    out
}

fn print_frame(label: &str, list: &VirtualList<Product>) {
    let visible = list.visible();
    println!(
        "{label}: window={:?} track={:?} materialized={}/{}",
        list.window(),
        visible.track,
        visible.len(),
        list.len()
    );
    if let Some(first) = visible.items.first() {
        println!(
            "  first: #{} {} ({:?}) ${}.{:02} stock={} @ {}px",
            first.index,
            first.item.name,
            first.item.category,
            first.item.price_cents / 100,
            first.item.price_cents % 100,
            first.item.stock,
            first.position_px
        );
    }
}

fn main() {
    let all = generate(10_000);

    let options = WindowOptions::new(100, 600)
        .expect("valid geometry")
        .with_replace_policy(ReplacePolicy::ResetToTop)
        .with_on_change(Some(|_: &ScrollSession, w: Window| {
            println!("  emitted {}..{}", w.start_index, w.end_index);
        }));
    let mut list = VirtualList::new(options, filter_and_sort(&all, "", None));
    print_frame("initial", &list);

    list.on_scroll(1000);
    print_frame("scrolled", &list);

    // Rubber-band overscroll from the host is clamped.
    list.on_scroll(-50);
    print_frame("overscroll", &list);

    list.batch_update(|s| {
        for offset in (0..50_000).step_by(250) {
            s.on_scroll(offset);
        }
    });
    print_frame("coalesced burst", &list);

    list.replace_items(filter_and_sort(&all, "product 9", Some(Category::Books)));
    print_frame("filtered", &list);

    list.scroll_to_index(list.len().saturating_sub(1), Align::End);
    print_frame("scroll to last", &list);

    let baseline = list.render_all();
    println!(
        "baseline materializes {} items, virtual list {}",
        baseline.len(),
        list.visible().len()
    );
}
