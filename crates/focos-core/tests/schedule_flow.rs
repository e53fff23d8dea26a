//! End-to-end flows across the store, gap analyzer, templates and the
//! scheduling surface, the way a UI session would drive them.

use focos_core::{
    compute_gaps, BlockStore, Category, Day, GapDetector, NewBlock, Priority, RecurrencePattern,
    SchedulingSurface, SuggestionTier, TemplateManager,
};

fn spec(title: &str, start: &str, end: &str, category: Category, day: Day) -> NewBlock {
    NewBlock {
        title: title.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        category,
        day,
        recurring: false,
        pattern: None,
        priority: Priority::Medium,
    }
}

#[test]
fn gym_session_add_then_drag_to_new_slot() {
    let mut store = BlockStore::open_in_memory().unwrap();
    let mut surface = SchedulingSurface::new();

    let gym = store
        .add(spec("Gym", "5:30 PM", "6:30 PM", Category::Fitness, Day::Monday))
        .unwrap();
    assert_eq!(store.len(), 1);

    surface.drag_start(&gym.id);
    let moved = surface.drop_on(&mut store, Day::Monday, "6:00 PM").unwrap();
    assert_eq!(moved.start, "6:00 PM");
    assert_eq!(moved.end, "7:00 PM");

    let slotted = store.find_by_slot(Day::Monday, "6:00 PM").unwrap();
    assert_eq!(slotted.id, gym.id);
}

#[test]
fn recurring_study_plan_shapes_every_weekday_gap_report() {
    let mut store = BlockStore::open_in_memory().unwrap();

    let mut study = spec("Study", "9:00 AM", "10:00 AM", Category::Study, Day::Monday);
    study.recurring = true;
    study.pattern = Some(RecurrencePattern::Weekdays);
    store.add(study).unwrap();

    for day in Day::weekdays() {
        let gaps = compute_gaps(&store.list_by_day(day));
        assert_eq!(gaps.len(), 2, "{day}");
        assert_eq!(gaps[0].duration_minutes(), 60);
        assert_eq!(gaps[1].duration_minutes(), 720);
        assert_eq!(gaps[1].tier(), SuggestionTier::DeepWork);
    }
    assert!(compute_gaps(&store.list_by_day(Day::Sunday)).is_empty());
}

#[test]
fn template_round_trip_through_a_different_day() {
    let mut store = BlockStore::open_in_memory().unwrap();
    let mut templates = TemplateManager::open_in_memory().unwrap();

    store
        .add(spec("Meditate", "7:00 AM", "7:30 AM", Category::Meditation, Day::Sunday))
        .unwrap();
    store
        .add(spec("Budget review", "8:00 PM", "9:00 PM", Category::Finance, Day::Sunday))
        .unwrap();

    let template = templates.save(&store, Day::Sunday, "Reset day").unwrap();
    assert_eq!(template.blocks.len(), 2);

    // First apply onto an empty day needs no overwrite.
    templates
        .apply(&mut store, &template.id, Day::Saturday, false)
        .unwrap();
    // Re-apply with overwrite does not duplicate.
    templates
        .apply(&mut store, &template.id, Day::Saturday, true)
        .unwrap();

    let saturday = store.list_by_day(Day::Saturday);
    assert_eq!(saturday.len(), 2);
    assert!(saturday.iter().all(|b| b.day == Day::Saturday));

    // Deleting the template leaves both days intact.
    templates.remove(&template.id).unwrap();
    assert_eq!(store.list_by_day(Day::Sunday).len(), 2);
    assert_eq!(store.list_by_day(Day::Saturday).len(), 2);
}

#[test]
fn cascade_delete_clears_a_recurring_plan_only() {
    let mut store = BlockStore::open_in_memory().unwrap();

    let mut study = spec("Study", "9:00 AM", "10:00 AM", Category::Study, Day::Monday);
    study.recurring = true;
    study.pattern = Some(RecurrencePattern::Daily);
    let primary = store.add(study).unwrap();
    store
        .add(spec("Gym", "6:00 PM", "7:00 PM", Category::Fitness, Day::Monday))
        .unwrap();
    assert_eq!(store.len(), 8);

    store.delete(&primary.id, true).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.list_by_day(Day::Monday)[0].title, "Gym");
}

#[test]
fn narrow_window_trims_the_gap_report() {
    let mut store = BlockStore::open_in_memory().unwrap();
    store
        .add(spec("Lunch", "12:00 PM", "1:00 PM", Category::Break, Day::Tuesday))
        .unwrap();

    let gaps = GapDetector::new()
        .with_window(11 * 60, 14 * 60)
        .find_gaps(&store.list_by_day(Day::Tuesday));
    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].start_label(), "11:00 AM");
    assert_eq!(gaps[0].end_label(), "12:00 PM");
    assert_eq!(gaps[1].start_label(), "1:00 PM");
    assert_eq!(gaps[1].end_label(), "2:00 PM");
}
