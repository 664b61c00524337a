//! Text-adventure rendering of simulation events.

use ct_core::{ActorId, Route};
use ct_sim::{SimEvent, StopReason};

/// Printed once before the initial status table.
pub const WELCOME: &str = "Welcome to the Commuter simulation. Here's the current situation: ";

/// Printed at the top of every turn report.
pub const TURN_INTRO: &str = "\nBuses ran and ran, or rather crawled, over the jammed roads...";

/// Asked between turns by an interactive driver.
pub const PROMPT: &str = "\nHit Return to continue, anything else to quit: ";

/// Printed last, however the run ended.
pub const GOODBYE: &str = "End of Commuter simulation.";

/// The narrative line(s) for one event.  Multi-line events embed `\n`.
pub fn describe(event: &SimEvent, route: &Route) -> String {
    match event {
        SimEvent::ActorSpawned { time, actor, name, inspector, stop, pronoun } => {
            let place = route.name(*stop);
            if *inspector {
                format!(
                    "It was {time} o'clock when Ticket inspector {name} ({actor}) marched up to the stop \
                     of {place} and started to wait for {pronoun} ride."
                )
            } else {
                format!(
                    "It was {time} o'clock when {name} ({actor}) walked up to the stop of {place} and \
                     started to wait for {pronoun} ride."
                )
            }
        }

        SimEvent::BusArrived { bus, stop } => format!(
            "\nAfter what felt like an eternity, bus {bus} made it to {}.",
            route.name(*stop)
        ),

        SimEvent::TerminusReached { had_passengers: true, .. } => {
            "The final stop looked like a mirage. Everyone felt relieved for a moment.".to_owned()
        }
        SimEvent::TerminusReached { had_passengers: false, .. } => {
            "The final stop looked like a mirage. What a shame no passenger was there to see it."
                .to_owned()
        }

        SimEvent::RidersDisembarked { riders, .. } => format!(
            "But happiness is vain for those who are now gloomily proceeding to walk to their \
             workplace:\n{} ",
            name_id_list(riders)
        ),

        SimEvent::TricksterExpelled { bus, inspector_name, trickster, trickster_name, .. } => format!(
            "After a short quarrel, inspector {inspector_name} managed to fine and jettison trickster \
             {trickster_name} ({trickster}) from bus {bus}.\nGood riddance!\n(Also, the inspector \
             seems to be satisfied and unwilling to check other passengers for now.)"
        ),

        SimEvent::TricksterGraced { bus, inspector, inspector_name, trickster, trickster_name } => format!(
            "{trickster_name} ({trickster}) on bus {bus} had no ticket, but inspector {inspector_name} \
             ({inspector}) pretended not to notice."
        ),

        SimEvent::InspectionOutcome { expelled: 0, .. } => {
            "Sometimes fortune favours the brave, in this crazy world of ours.".to_owned()
        }
        SimEvent::InspectionOutcome { .. } => {
            "Some days you win, some days you lose.\nBut when all is said and done, having no ticket \
             is just a calculated risk."
                .to_owned()
        }

        SimEvent::PassengersCollected { count: 1, .. } => {
            "One lost soul was collected from the bus stop.".to_owned()
        }
        SimEvent::PassengersCollected { count, .. } => {
            format!("{count} lost souls were collected from the bus stop.")
        }

        SimEvent::PassengersGaveUp { actors, .. } => format!(
            "{} passengers couldn't make it anymore, so they willingly left the bus. Let's wish them \
             a good walk: {} ",
            actors.len(),
            id_list(actors)
        ),

        SimEvent::BusDestroyed { bus, passengers } => format!(
            "\nBus {bus} was a little too overcrowded.\nThe {passengers} passengers decided to go \
             berserk and eventually destroy the bus.\nLook at them, they've made a bonfire out of \
             gasoline and bus chairs!\nAren't they lively? Don't you wish you were having fun with them?"
        ),

        SimEvent::BusDispatched { crowded_stop, from, .. } => format!(
            "\nThe main office of the Public Transportation System noticed from its security \
             cameras\nthat the bus stop in {} was too crowded, so they decided to send a new bus \
             from {} before anyone got angry.\nAs if they weren't already...",
            route.name(*crowded_stop),
            route.name(*from)
        ),
    }
}

/// Why the run ended, in the simulation's own words.
pub fn stop_reason(reason: StopReason) -> &'static str {
    match reason {
        StopReason::Timeout => {
            "Timeout!\nIf you're not at your office desk by now, you have won a free ride to the \
             \"job market (TM)\". Congratulations!"
        }
        StopReason::AllRidersArrived => {
            "It appears that all the workers are producing GDP right now.\nAnother incredible \
             success story for Public Transportation!\n(This is _so_ going to be on all papers \
             tomorrow!)"
        }
        StopReason::UserStopped => {
            "Even if you decided to close this Matrix, there's no guarantee you aren't trapped in \
             a higher level simulation.\nTake care..."
        }
    }
}

/// Lines a console prints after the run.  When the report stream did not
/// carry the stop reason (CSV), the console prints it before [`GOODBYE`].
pub fn farewell(reason: Option<StopReason>, reason_reported: bool) -> Vec<&'static str> {
    let mut lines = Vec::with_capacity(2);
    if let Some(reason) = reason.filter(|_| !reason_reported) {
        lines.push(stop_reason(reason));
    }
    lines.push(GOODBYE);
    lines
}

/// `[('Paola', 3), ('Derek', 7)]`
fn name_id_list(riders: &[(ActorId, &str)]) -> String {
    let items: Vec<String> = riders.iter().map(|(id, name)| format!("('{name}', {id})")).collect();
    format!("[{}]", items.join(", "))
}

/// `[3, 7]`
fn id_list(ids: &[ActorId]) -> String {
    let items: Vec<String> = ids.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
