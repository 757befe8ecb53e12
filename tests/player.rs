//! CD-player walkthrough: a host with payload-carrying events, guarded
//! rows sharing a (start, event) pair, and host methods as actions.

use rowfsm::builder::{row, StateMachineBuilder};
use rowfsm::state_enum;
use rowfsm::{BuildError, StateMachine};

state_enum! {
    enum PlayerState {
        Stopped,
        Open,
        Empty,
        Playing,
        Paused,
    }
}

struct Play;
struct OpenClose;
struct CdDetected {
    title: String,
}
struct Stop;
struct Pause;

#[derive(Default)]
struct Player {
    cd_title: String,
    autoplay: bool,
    ops: Vec<&'static str>,
}

impl Player {
    fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    fn start_playback(&mut self) {
        self.ops.push("start_playback");
    }

    fn start_autoplay(&mut self, cd: &CdDetected) {
        self.ops.push("start_autoplay");
        self.cd_title = cd.title.clone();
    }

    fn open_drawer(&mut self) {
        self.ops.push("open_drawer");
        self.cd_title.clear();
    }

    fn eject_bad_cd(&mut self, _cd: &CdDetected) {
        self.ops.push("eject_bad_cd");
        self.cd_title.clear();
    }

    fn close_drawer(&mut self) {
        self.ops.push("close_drawer");
    }

    fn store_cd_info(&mut self, cd: &CdDetected) {
        self.ops.push("store_cd_info");
        self.cd_title = cd.title.clone();
    }

    fn stop_playback(&mut self) {
        self.ops.push("stop_playback");
    }

    fn pause_playback(&mut self) {
        self.ops.push("pause_playback");
    }

    fn resume_playback(&mut self) {
        self.ops.push("resume_playback");
    }

    fn stop_and_open(&mut self) {
        self.ops.push("stop_and_open");
        self.cd_title.clear();
    }
}

fn player() -> Result<StateMachine<PlayerState, Player>, BuildError> {
    use PlayerState::*;

    // Declaration order matters for the three Empty/CdDetected rows:
    // bad CD first, then autoplay, then the unguarded fallback.
    StateMachineBuilder::new()
        .initial(Empty)
        .row(row::<_, _, Play>(Stopped, Playing).action_on_host(Player::start_playback))?
        .row(row::<_, _, OpenClose>(Stopped, Open).action_on_host(Player::open_drawer))?
        .row(row::<_, _, OpenClose>(Open, Empty).action_on_host(Player::close_drawer))?
        .row(row::<_, _, OpenClose>(Empty, Open).action_on_host(Player::open_drawer))?
        .row(row(Empty, Open)
            .when_event(|cd: &CdDetected| cd.title.is_empty())
            .action(Player::eject_bad_cd))?
        .row(row(Empty, Playing)
            .when_host(Player::is_autoplay)
            .action(Player::start_autoplay))?
        .row(row(Empty, Stopped).action(Player::store_cd_info))?
        .row(row::<_, _, Stop>(Playing, Stopped).action_on_host(Player::stop_playback))?
        .row(row::<_, _, Pause>(Playing, Paused).action_on_host(Player::pause_playback))?
        .row(row::<_, _, OpenClose>(Playing, Open).action_on_host(Player::stop_and_open))?
        .row(row::<_, _, Play>(Paused, Playing).action_on_host(Player::resume_playback))?
        .row(row::<_, _, Stop>(Paused, Stopped).action_on_host(Player::stop_playback))?
        .row(row::<_, _, OpenClose>(Paused, Open).action_on_host(Player::stop_and_open))?
        .build(Player::default())
}

#[test]
fn walkthrough() -> Result<(), Box<dyn std::error::Error>> {
    use PlayerState::*;

    let p = player()?;
    assert_eq!(p.current_state(), Empty);
    assert!(!p.context().is_autoplay());
    assert!(p.context().cd_title.is_empty());

    p.process_event(&OpenClose)?;
    assert_eq!(p.current_state(), Open);
    p.process_event(&OpenClose)?;
    assert_eq!(p.current_state(), Empty);

    p.process_event(&CdDetected {
        title: "louie, louie".into(),
    })?;
    assert_eq!(p.current_state(), Stopped);
    assert_eq!(p.context().cd_title, "louie, louie");

    p.process_event(&Play)?;
    assert_eq!(p.current_state(), Playing);
    p.process_event(&Pause)?;
    assert_eq!(p.current_state(), Paused);
    p.process_event(&Play)?;
    assert_eq!(p.current_state(), Playing);
    p.process_event(&Stop)?;
    assert_eq!(p.current_state(), Stopped);
    p.process_event(&Play)?;
    assert_eq!(p.current_state(), Playing);

    p.process_event(&OpenClose)?;
    assert_eq!(p.current_state(), Open);
    assert!(p.context().cd_title.is_empty());
    p.process_event(&OpenClose)?;
    assert_eq!(p.current_state(), Empty);
    assert!(p.context().cd_title.is_empty());

    // Play in Empty matches no row: default no-transition policy stays put
    p.process_event(&Play)?;
    assert_eq!(p.current_state(), Empty);
    assert!(p.context().cd_title.is_empty());

    Ok(())
}

#[test]
fn bad_cd_is_ejected() -> Result<(), Box<dyn std::error::Error>> {
    use PlayerState::*;

    let p = player()?;
    p.process_event(&OpenClose)?;
    p.process_event(&OpenClose)?;
    assert_eq!(p.current_state(), Empty);

    p.process_event(&CdDetected { title: String::new() })?;
    assert_eq!(p.current_state(), Open);
    assert!(p.context().cd_title.is_empty());
    assert!(p.context().ops.contains(&"eject_bad_cd"));

    Ok(())
}

#[test]
fn autoplay_starts_playback_directly() -> Result<(), Box<dyn std::error::Error>> {
    use PlayerState::*;

    let p = player()?;
    p.context_mut().autoplay = true;

    p.process_event(&OpenClose)?;
    p.process_event(&OpenClose)?;
    assert_eq!(p.current_state(), Empty);

    p.process_event(&CdDetected {
        title: "louie, louie".into(),
    })?;
    assert_eq!(p.current_state(), Playing);
    assert_eq!(p.context().cd_title, "louie, louie");
    assert!(p.context().ops.contains(&"start_autoplay"));
    assert!(!p.context().ops.contains(&"store_cd_info"));

    Ok(())
}

#[test]
fn actions_run_in_event_order() -> Result<(), Box<dyn std::error::Error>> {
    let p = player()?;
    p.process_event(&OpenClose)?;
    p.process_event(&OpenClose)?;
    p.process_event(&CdDetected { title: "X".into() })?;
    p.process_event(&Play)?;

    assert_eq!(
        p.context().ops,
        vec!["open_drawer", "close_drawer", "store_cd_info", "start_playback"]
    );
    Ok(())
}
