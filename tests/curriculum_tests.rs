use proctor::curriculum::{Curriculum, CurriculumError};

#[test]
fn all_iterates_week_major_then_declared_order() {
    let curriculum = Curriculum::new();
    let all = curriculum.all();

    assert_eq!(all[0].class_name(), "edu.bootcamp.suite.week0.day0.MainTest");

    let slots: Vec<(usize, usize)> = all.iter().map(|c| (c.week(), c.day())).collect();
    let mut sorted = slots.clone();
    sorted.sort();
    assert_eq!(slots, sorted);
}

#[test]
fn day_lookup_preserves_declared_order() {
    let curriculum = Curriculum::new();
    let day = curriculum.day(0, 1).expect("week 0 day 1 is scheduled");

    let names: Vec<&str> = day.iter().map(|c| c.class_name()).collect();
    assert_eq!(names, vec![
        "edu.bootcamp.suite.week0.day1.AlphabetTest",
        "edu.bootcamp.suite.week0.day1.NumbersTest",
    ]);
}

#[test]
fn empty_day_slot_yields_empty_list_not_error() {
    let curriculum = Curriculum::new();
    assert!(curriculum.day(1, 0).expect("empty slot is legal").is_empty());
}

#[test]
fn out_of_range_lookups_are_typed_errors() {
    let curriculum = Curriculum::new();
    assert_eq!(
        curriculum.week(9).unwrap_err(),
        CurriculumError::UnknownWeek(9)
    );
    assert_eq!(
        curriculum.day(9, 0).unwrap_err(),
        CurriculumError::UnknownWeek(9)
    );
    assert_eq!(curriculum.day(0, 9).unwrap_err(), CurriculumError::UnknownDay {
        week: 0,
        day:  9
    });
}

#[test]
fn week_lookup_collects_every_day() {
    let curriculum = Curriculum::new();
    let week = curriculum.week(2).expect("week 2 is scheduled");
    assert_eq!(week.len(), 7);
    assert!(week.iter().all(|c| c.week() == 2));
}

#[test]
fn find_resolves_only_declared_identifiers() {
    let curriculum = Curriculum::new();

    let found = curriculum
        .find("edu.bootcamp.suite.week1.day2.ListTest")
        .expect("declared class resolves");
    assert_eq!(found.week(), 1);
    assert_eq!(found.day(), 2);

    let err = curriculum.find("edu.bootcamp.suite.week9.NopeTest").unwrap_err();
    assert_eq!(
        err,
        CurriculumError::UnknownClass("edu.bootcamp.suite.week9.NopeTest".to_string())
    );
}
