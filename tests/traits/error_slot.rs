use error_defer::traits::ErrorSlot;

#[test]
fn option_slot_vacancy_follows_none() {
    let mut slot: Option<i32> = None;
    assert!(slot.is_vacant());
    assert!(!slot.is_occupied());

    slot.fill(-1);
    assert!(slot.is_occupied());
    assert_eq!(slot, Some(-1));
}

#[test]
fn result_slot_vacancy_follows_ok() {
    let ok: Result<Vec<u8>, &str> = Ok(vec![1, 2, 3]);
    assert!(ok.is_vacant());

    let err: Result<Vec<u8>, &str> = Err("not found");
    assert!(err.is_occupied());
}

#[test]
fn custom_slot_can_record_fills() {
    #[derive(Default)]
    struct Recorder {
        errors: Vec<String>,
    }

    impl ErrorSlot<String> for Recorder {
        fn is_vacant(&self) -> bool {
            self.errors.is_empty()
        }

        fn fill(&mut self, error: String) {
            self.errors.push(error);
        }
    }

    let mut recorder = Recorder::default();
    error_defer::capture(&mut recorder, || Err("first".to_string()));
    error_defer::capture(&mut recorder, || Err("second".to_string()));

    assert_eq!(recorder.errors, vec!["first".to_string()]);
}
