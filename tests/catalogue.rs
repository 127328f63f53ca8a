// Catalogue behaviour guard rails: add/remove/filter/average against the
// house menu and hand-built seeds.
mod support;
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use christofel::{
    Course, DraftItem, ImageRef, MenuCatalogue, MenuItem, MenuItemId, Price, Rejection, Seed,
    format_amount,
};

use common::{house_catalogue, ids, valid_draft};

#[test]
fn valid_add_prepends_exactly_one_item() {
    let mut catalogue = house_catalogue();
    let before = ids(&catalogue);

    let id = catalogue
        .add(DraftItem::new("Bobotie", "Main Courses", 165.0, "Cape Malay classic"))
        .expect("valid draft");

    let after = ids(&catalogue);
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0], id);
    assert_eq!(&after[1..], &before[..]);
    let item = &catalogue.list_all()[0];
    assert_eq!(item.name(), "Bobotie");
    assert_eq!(item.course(), Course::MainCourses);
    assert_eq!(item.image(), &ImageRef::placeholder());
}

#[test]
fn invalid_drafts_leave_catalogue_untouched() {
    let mut catalogue = house_catalogue();
    let before = ids(&catalogue);

    let drafts = [
        DraftItem::new("Soup", "Starters", 0.0, "x"),
        DraftItem::new("Soup", "Starters", -12.5, "x"),
        DraftItem::new("Soup", "Starters", f64::NAN, "x"),
        DraftItem::new("Soup", "Starters", "twelve", "x"),
        DraftItem::new("   ", "Starters", 10.0, "x"),
        DraftItem::new("Soup", "Drinks", 10.0, "x"),
        DraftItem::new("Soup", "", 10.0, "x"),
        DraftItem::new("Soup", "s-t-a-r-t-e-r-s", 10.0, "x"),
        DraftItem::new("Soup", "Des serts", 10.0, "x"),
    ];
    for draft in drafts {
        assert!(catalogue.add(draft.clone()).is_err(), "{draft:?} accepted");
        assert_eq!(ids(&catalogue), before);
    }
}

#[test]
fn empty_name_is_rejected() {
    let mut catalogue = house_catalogue();
    let len = catalogue.len();
    let result = catalogue.add(DraftItem::new("", "Starters", 10.0, "x"));
    assert_eq!(result, Err(Rejection::EmptyName));
    assert_eq!(catalogue.len(), len);
}

#[test]
fn added_price_is_rounded_to_cents() {
    let mut catalogue = house_catalogue();
    let id = catalogue
        .add(DraftItem::new("Test Dish", "Desserts", 19.999, "x"))
        .unwrap();
    let item = catalogue.get(&id).unwrap();
    assert_eq!(item.price().cents(), 2000);
    assert_eq!(item.price().to_string(), "20.00");
    assert_eq!(item.price().amount(), 20.0);
}

#[test]
fn added_fields_are_trimmed() {
    let mut catalogue = MenuCatalogue::new(Seed::empty());
    let id = catalogue
        .add(DraftItem::new("  Pavlova  ", "  desserts ", " 55 ", "  berries  "))
        .unwrap();
    let item = catalogue.get(&id).unwrap();
    assert_eq!(item.name(), "Pavlova");
    assert_eq!(item.description(), "berries");
    assert_eq!(item.course(), Course::Desserts);
}

#[test]
fn removed_ids_stay_gone_and_second_remove_is_noop() {
    let mut catalogue = house_catalogue();
    let target = MenuItemId::from("3");
    let before = ids(&catalogue);

    let removed = catalogue.remove(&target).expect("seed item present");
    assert_eq!(removed.name(), "Roasted Tomato Soup");
    assert!(!ids(&catalogue).contains(&target));
    let expected: Vec<MenuItemId> = before.into_iter().filter(|id| id != &target).collect();
    assert_eq!(ids(&catalogue), expected);

    assert!(catalogue.remove(&target).is_none());
    assert_eq!(ids(&catalogue), expected);
}

#[test]
fn removing_unknown_id_is_noop() {
    let mut catalogue = house_catalogue();
    let before = ids(&catalogue);
    assert!(catalogue.remove(&MenuItemId::from("nonexistent-id")).is_none());
    assert_eq!(ids(&catalogue), before);
}

#[test]
fn ids_are_never_reused() {
    let mut catalogue = MenuCatalogue::new(Seed::empty());
    let first = catalogue.add(valid_draft("One")).unwrap();
    catalogue.remove(&first);
    let second = catalogue.add(valid_draft("Two")).unwrap();
    assert_ne!(first, second);

    let mut issued = vec![first, second];
    for n in 0..20 {
        issued.push(catalogue.add(valid_draft(&format!("Dish {n}"))).unwrap());
    }
    let mut unique = issued.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), issued.len());
}

#[test]
fn issued_ids_avoid_seeded_ids() -> Result<()> {
    let price = Price::from_cents(1000).unwrap();
    let seeded = MenuItem::new(
        MenuItemId::from("item-1"),
        "Seeded",
        price,
        Course::Starters,
        "",
        ImageRef::placeholder(),
    )?;
    let mut catalogue = MenuCatalogue::new(Seed::from_items(vec![seeded])?);
    let id = catalogue.add(valid_draft("Fresh")).unwrap();
    assert_ne!(id.as_str(), "item-1");
    assert_eq!(catalogue.len(), 2);
    Ok(())
}

#[test]
fn list_by_course_is_a_stable_filter() {
    let mut catalogue = house_catalogue();
    catalogue
        .add(DraftItem::new("Oysters", "Starters", 150.0, ""))
        .unwrap();
    catalogue
        .add(DraftItem::new("Ice Cream", "Desserts", 45.0, ""))
        .unwrap();

    for course in Course::ALL {
        let filtered: Vec<&MenuItem> = catalogue.list_by_course(course).collect();
        let expected: Vec<&MenuItem> = catalogue
            .list_all()
            .iter()
            .filter(|item| item.course() == course)
            .collect();
        assert_eq!(filtered, expected);
    }

    let starters: Vec<&str> = catalogue
        .list_by_course(Course::Starters)
        .map(MenuItem::name)
        .collect();
    assert_eq!(
        starters,
        vec![
            "Oysters",
            "Beef Carpaccio",
            "Seared Scallops",
            "Roasted Tomato Soup",
            "Burrata & Heirloom Tomato",
        ]
    );
}

#[test]
fn listing_is_idempotent() {
    let catalogue = house_catalogue();
    assert_eq!(catalogue.list_all(), catalogue.list_all());
    let first: Vec<&MenuItem> = catalogue.list_by_course(Course::Desserts).collect();
    let second: Vec<&MenuItem> = catalogue.list_by_course(Course::Desserts).collect();
    assert_eq!(first, second);
}

#[test]
fn starters_average_matches_house_menu() {
    let catalogue = house_catalogue();
    let average = catalogue.average_price(Course::Starters);
    assert!((average - 104.74).abs() < 1e-9, "got {average}");
    assert_eq!(format_amount(average), "104.74");
}

#[test]
fn average_of_empty_course_is_zero() {
    let mut catalogue = MenuCatalogue::new(Seed::empty());
    assert_eq!(catalogue.average_price(Course::Desserts), 0.0);

    catalogue
        .add(DraftItem::new("Soup", "Starters", 10.0, ""))
        .unwrap();
    assert_eq!(catalogue.average_price(Course::Desserts), 0.0);
    assert_eq!(catalogue.average_price(Course::Starters), 10.0);
}

#[test]
fn average_uses_stored_prices() {
    let mut catalogue = MenuCatalogue::new(Seed::empty());
    catalogue
        .add(DraftItem::new("A", "Desserts", 10.004, ""))
        .unwrap();
    catalogue
        .add(DraftItem::new("B", "Desserts", 20.016, ""))
        .unwrap();
    // 10.00 and 20.02 as stored
    let average = catalogue.average_price(Course::Desserts);
    assert!((average - 15.01).abs() < 1e-9, "got {average}");
    assert_eq!(format_amount(average), "15.01");
}

#[test]
fn summary_covers_every_course_in_order() {
    let mut catalogue = house_catalogue();
    let id = catalogue.list_by_course(Course::MainCourses).next().unwrap().id().clone();
    catalogue.remove(&id);

    let summary = catalogue.summary();
    let courses: Vec<Course> = summary.iter().map(|entry| entry.course).collect();
    assert_eq!(courses, Course::ALL.to_vec());
    assert_eq!(summary[0].items, 4);
    assert_eq!(summary[1].items, 2);
    assert_eq!(summary[2].items, 3);
    assert_eq!(
        summary[1].average_price,
        catalogue.average_price(Course::MainCourses)
    );
}

#[test]
fn placeholder_image_is_configurable() {
    let mut catalogue =
        MenuCatalogue::new(Seed::empty()).with_placeholder_image(ImageRef::new("img://none"));
    let id = catalogue.add(valid_draft("Stew")).unwrap();
    assert_eq!(catalogue.get(&id).unwrap().image().as_str(), "img://none");
}
