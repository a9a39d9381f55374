#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::rc::Rc;
    use Direction::*;
    use crate::core::*;
    use crate::feedback::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(GameEvent, u32)>,
    }

    impl Feedback for Recorder {
        fn on_event(&mut self, event: &GameEvent, session: &Session) {
            self.seen.push((*event, session.move_count()));
        }
    }

    #[test]
    fn table_forwards_every_event_to_every_sink() {
        let first = Rc::new(RefCell::new(Recorder::default()));
        let second = Rc::new(RefCell::new(Recorder::default()));
        let mut table = FeedbackTable::new()
            .with(first.clone())
            .with(second.clone());
        table.register(Box::new(EventLog));
        assert_eq!(table.len(), 3);

        let mut session = Session::load("#######\n#@o.  #\n#######").unwrap();
        for direction in [Up, Right] {
            let event = session.submit_move(direction).unwrap();
            table.dispatch(&event, &session);
        }

        let expected = vec![(GameEvent::Blocked(BlockReason::Wall), 1), (GameEvent::Won, 2)];
        assert_eq!(first.borrow().seen, expected);
        assert_eq!(second.borrow().seen, expected);
    }

    #[test]
    fn status_line_keeps_last_message() {
        let status = Rc::new(RefCell::new(StatusLine::default()));
        let mut table = FeedbackTable::new().with(status.clone());
        let mut session = Session::load("#########\n#@o .  .#\n#  o    #\n#########").unwrap();

        let event = session.submit_move(Left).unwrap();
        table.dispatch(&event, &session);
        assert_eq!(status.borrow().message(), "Ouch, that's a wall");
        assert_eq!(status.borrow().tone(), Tone::Bump);

        let event = session.submit_move(Right).unwrap();
        table.dispatch(&event, &session);
        assert_eq!(status.borrow().message(), "Heave!");

        let event = session.submit_move(Right).unwrap();
        table.dispatch(&event, &session);
        assert_eq!(event, GameEvent::CrateCompleted);
        assert_eq!(status.borrow().tone(), Tone::Success);

        status.borrow_mut().clear();
        assert_eq!(status.borrow().message(), "");
        assert_eq!(status.borrow().tone(), Tone::Neutral);
    }

    #[test]
    fn every_event_has_a_description() {
        let events = [
            GameEvent::Moved,
            GameEvent::Pushed,
            GameEvent::Blocked(BlockReason::Wall),
            GameEvent::Blocked(BlockReason::OutOfBounds),
            GameEvent::Blocked(BlockReason::CrateStuck),
            GameEvent::Blocked(BlockReason::NoMover),
            GameEvent::CrateCompleted,
            GameEvent::Won,
        ];
        for event in events {
            let (message, tone) = describe(&event);
            if event != GameEvent::Moved {
                assert!(!message.is_empty(), "{:?}", event);
            }
            if let GameEvent::Blocked(_) = event {
                assert_eq!(tone, Tone::Bump);
            }
        }
    }
}
