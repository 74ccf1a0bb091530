// Timeline layout: column placement, canvas sizing and ordering

use philosophers_timeline::{compute_timeline, Entity, TimelineConfig, TimelineLayout};

fn config() -> TimelineConfig {
    TimelineConfig {
        current_year: Some(2024),
        ..TimelineConfig::default()
    }
}

fn philosophers() -> Vec<Entity> {
    let json = r#"[
        {"id": "kant", "name": "Immanuel Kant", "birthYear": "1724 AD", "deathYear": "1804 AD"},
        {"id": "plato", "name": "Plato", "birthYear": "428 BC", "deathYear": "348 BC"},
        {"id": "socrates", "name": "Socrates", "birthYear": "470 BC", "deathYear": "399 BC"},
        {"id": "aristotle", "name": "Aristotle", "birthYear": "384 BC", "deathYear": "322 BC"},
        {"id": "thales", "name": "Thales of Miletus", "birthYear": "624 BC", "deathYear": "546 BC"},
        {"id": "anonymous", "name": "Anonymous"},
        {"id": "hume", "name": "David Hume", "birthYear": "1711 AD", "deathYear": "1776 AD"},
        {"id": "augustine", "name": "Augustine of Hippo", "birthYear": "354 AD", "deathYear": "430 AD"},
        {"id": "rousseau", "name": "Jean-Jacques Rousseau", "birthYear": "1712 AD", "deathYear": "1778 AD"},
        {"id": "hegel", "name": "Georg Wilhelm Friedrich Hegel", "birthYear": "1770 AD", "deathYear": "1831 AD"},
        {"id": "singer", "name": "Peter Singer", "birthYear": "1946 AD"},
        {"id": "nussbaum", "name": "Martha Nussbaum", "birthYear": "1947 AD"}
    ]"#;
    serde_json::from_str(json).expect("fixture should deserialize")
}

fn assert_no_column_overlap(layout: &TimelineLayout, config: &TimelineConfig) {
    for (i, a) in layout.items.iter().enumerate() {
        for b in layout.items.iter().skip(i + 1) {
            if a.column != b.column {
                continue;
            }
            let a_bottom = a.padded_bottom(config);
            let b_bottom = b.padded_bottom(config);
            assert!(
                a_bottom < b.top || b_bottom < a.top,
                "{} [{}, {}] and {} [{}, {}] overlap in column {}",
                a.entity.id, a.top, a_bottom, b.entity.id, b.top, b_bottom, a.column
            );
        }
    }
}

#[test]
fn test_socrates_and_plato_get_separate_columns() {
    let entities = vec![
        Entity::new("socrates", "Socrates").with_years(Some("470 BC"), Some("399 BC")),
        Entity::new("plato", "Plato").with_years(Some("428 BC"), Some("348 BC")),
    ];
    let layout = compute_timeline(&entities, &config());

    assert_eq!(layout.items[0].entity.id, "socrates");
    assert_eq!(layout.items[0].column, 0);
    assert_eq!(layout.items[1].entity.id, "plato");
    assert_eq!(layout.items[1].column, 1);
}

#[test]
fn test_input_order_does_not_matter_once_sorted() {
    let entities = vec![
        Entity::new("plato", "Plato").with_years(Some("428 BC"), Some("348 BC")),
        Entity::new("socrates", "Socrates").with_years(Some("470 BC"), Some("399 BC")),
    ];
    let layout = compute_timeline(&entities, &config());

    assert_eq!(layout.items[0].entity.id, "socrates");
    assert_eq!(layout.items[1].column, 1);
}

#[test]
fn test_no_overlap_within_columns() {
    let config = config();
    let layout = compute_timeline(&philosophers(), &config);

    assert_eq!(layout.items.len(), 11);
    assert_no_column_overlap(&layout, &config);
}

#[test]
fn test_column_reuse_after_gap() {
    let layout = compute_timeline(&philosophers(), &config());
    let column_of = |id: &str| {
        layout
            .items
            .iter()
            .find(|item| item.entity.id == id)
            .map(|item| item.column)
            .expect("entity should be placed")
    };

    // Lifespans centuries apart share the first column
    assert_eq!(column_of("thales"), 0);
    assert_eq!(column_of("augustine"), 0);
    assert_eq!(column_of("hume"), 0);
    assert_eq!(column_of("rousseau"), 1);
    assert_eq!(column_of("kant"), 2);
}

#[test]
fn test_layout_is_deterministic() {
    let config = config();
    let first = compute_timeline(&philosophers(), &config);
    let second = compute_timeline(&philosophers(), &config);

    let placements = |layout: &TimelineLayout| {
        layout
            .items
            .iter()
            .map(|item| (item.entity.id.clone(), item.top, item.column))
            .collect::<Vec<_>>()
    };
    assert_eq!(placements(&first), placements(&second));
}

#[test]
fn test_canvas_bounds() {
    let config = config();
    let layout = compute_timeline(&philosophers(), &config);

    // Earliest birth is Thales; the living philosophers stretch to the current year
    assert_eq!(layout.first_year, -624 - 27);
    assert_eq!(layout.last_year, 2024 + 27);
    assert_eq!(
        layout.canvas.height,
        (layout.last_year - layout.first_year) as f64 * config.year_to_point_scale
    );

    let max_column = layout.items.iter().map(|item| item.column).max().unwrap();
    assert_eq!(
        layout.canvas.width,
        config.cell_x_inset + (max_column + 1) as f64 * (config.cell_width + config.cell_padding)
    );
    assert_eq!(layout.column_count(), max_column + 1);
}

#[test]
fn test_same_birth_year_keeps_input_order() {
    let entities = vec![
        Entity::new("first", "First").with_years(Some("100 AD"), Some("160 AD")),
        Entity::new("second", "Second").with_years(Some("100 AD"), Some("150 AD")),
        Entity::new("third", "Third").with_years(Some("100 AD"), Some("140 AD")),
    ];
    let layout = compute_timeline(&entities, &config());

    let order: Vec<(&str, usize)> = layout
        .items
        .iter()
        .map(|item| (item.entity.id.as_str(), item.column))
        .collect();
    assert_eq!(order, vec![("first", 0), ("second", 1), ("third", 2)]);
}

#[test]
fn test_undated_death_bar_has_default_height() {
    let config = config();
    let entities = vec![
        Entity::new("singer", "Peter Singer").with_years(Some("1946 AD"), None),
        // Starts 60 units below Singer: inside his 100 + 50 padded span
        Entity::new("later", "Later").with_years(Some("1986 AD"), None),
        // Starts one unit past Singer's padded span
        Entity::new("much_later", "Much Later").with_years(Some("2047 AD"), None),
    ];
    let layout = compute_timeline(&entities, &config);

    assert_eq!(layout.items[0].height, config.cell_height);
    assert_eq!(layout.items[1].column, 1);
    assert_eq!(layout.items[2].column, 0);
}

#[test]
fn test_custom_scale() {
    let config = TimelineConfig {
        year_to_point_scale: 1.0,
        addition_years: 0,
        vertical_cell_padding: 0.0,
        current_year: Some(2024),
        ..TimelineConfig::default()
    };
    let entities = vec![
        Entity::new("a", "A").with_years(Some("0 AD"), Some("10 AD")),
        Entity::new("b", "B").with_years(Some("11 AD"), Some("20 AD")),
        Entity::new("c", "C").with_years(Some("20 AD"), Some("30 AD")),
    ];
    let layout = compute_timeline(&entities, &config);

    // [0, 10] and [11, 20] share column 0; [20, 30] touches b's last unit
    let columns: Vec<usize> = layout.items.iter().map(|item| item.column).collect();
    assert_eq!(columns, vec![0, 0, 1]);
    assert_eq!(layout.canvas.height, 30.0);
}
