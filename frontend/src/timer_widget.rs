//! Study timer widget
//!
//! Each timer item on the board gets its own `CountdownWidget`. The widget's
//! processor owns the `CountdownTimer` and, while running, the tick task, so
//! dropping the widget (close button, Clear Canvas) stops the countdown.

use crate::board::Corkboard;
use crate::dataflow::{Actor, Atom, Relay, relay};
use crate::dragging::shield_from_drag;
use futures::{StreamExt, select};
use gloo_timers::future::IntervalStream;
use shared::{CountdownTimer, ItemId, TickGeneration, TickOutcome, TimerPhase, TimerSection};
use zoon::*;

/// What the panel renders.
#[derive(Clone, Debug, PartialEq)]
pub struct TimerPanel {
    pub display: String,
    pub phase: TimerPhase,
}

impl TimerPanel {
    fn of(timer: &CountdownTimer<TaskHandle>) -> Self {
        Self {
            display: timer.display(),
            phase: timer.phase(),
        }
    }
}

#[derive(Clone)]
pub struct CountdownWidget {
    pub panel: Actor<TimerPanel>,
    pub minutes_field: Atom<String>,
    pub seconds_field: Atom<String>,
    start_pressed_relay: Relay<(String, String)>,
    pub close_pressed_relay: Relay,
}

impl CountdownWidget {
    pub fn new(item_id: ItemId, board: Corkboard, settings: &TimerSection) -> Self {
        let (start_pressed_relay, mut start_pressed_stream) = relay::<(String, String)>();
        let (close_pressed_relay, mut close_pressed_stream) = relay::<()>();
        let (tick_elapsed_relay, mut tick_elapsed_stream) = relay::<TickGeneration>();

        let timer = CountdownTimer::<TaskHandle>::new(settings);
        let tick_interval_ms = settings.tick_interval_ms;

        let panel = Actor::new(TimerPanel::of(&timer), async move |state| {
            let mut timer = timer;

            loop {
                select! {
                    fields = start_pressed_stream.next() => {
                        let Some((minutes, seconds)) = fields else { break };
                        let started = timer.start(&minutes, &seconds, |generation| {
                            start_ticking(tick_elapsed_relay.clone(), generation, tick_interval_ms)
                        });
                        match started {
                            Ok(total) => zoon::println!("Timer {item_id} started for {total}s"),
                            Err(error) => zoon::eprintln!("Timer {item_id}: {error}"),
                        }
                    }
                    generation = tick_elapsed_stream.next() => {
                        let Some(generation) = generation else { break };
                        if timer.tick(generation) == TickOutcome::Expired {
                            zoon::println!("Timer {item_id} expired");
                        }
                    }
                    closed = close_pressed_stream.next() => {
                        if closed.is_some() {
                            timer.close();
                            board.remove_item(item_id);
                        }
                        break;
                    }
                }
                state.set_neq(TimerPanel::of(&timer));
            }
        });

        Self {
            panel,
            minutes_field: Atom::new(settings.minutes.to_string()),
            seconds_field: Atom::new(format!("{:02}", settings.seconds)),
            start_pressed_relay,
            close_pressed_relay,
        }
    }

    /// Start pressed: snapshot both fields as they are right now.
    pub fn press_start(&self) {
        self.start_pressed_relay.send((
            self.minutes_field.get_cloned(),
            self.seconds_field.get_cloned(),
        ));
    }
}

/// Repeating tick for one generation; aborted when the handle is dropped.
fn start_ticking(
    tick_elapsed_relay: Relay<TickGeneration>,
    generation: TickGeneration,
    tick_interval_ms: u32,
) -> TaskHandle {
    Task::start_droppable(async move {
        let mut ticks = IntervalStream::new(tick_interval_ms);
        while ticks.next().await.is_some() {
            tick_elapsed_relay.send(generation);
        }
    })
}

pub fn timer_panel(
    item_id: ItemId,
    board: Corkboard,
    settings: &TimerSection,
) -> RawHtmlEl<web_sys::HtmlElement> {
    let widget = CountdownWidget::new(item_id, board, settings);

    RawHtmlEl::new("div")
        .class("study-timer")
        .style("width", "200px")
        .style("padding", "10px")
        .style("background", "#ffffff")
        .style("border", "2px solid #8b5a2b")
        .style("border-radius", "8px")
        .style("box-shadow", "2px 2px 6px rgba(0, 0, 0, 0.35)")
        .style("font-family", "sans-serif")
        .child(
            Row::new()
                .s(Align::new().center_x())
                .s(Gap::new().x(4))
                .item(time_field(widget.minutes_field.clone(), "Min"))
                .item(Text::new(":"))
                .item(time_field(widget.seconds_field.clone(), "Sec")),
        )
        .child(
            Row::new()
                .s(Align::new().center_x())
                .s(Gap::new().x(6))
                .s(Padding::new().top(8))
                .item(timer_button("Start", {
                    let widget = widget.clone();
                    move || widget.press_start()
                }))
                .item(timer_button("X", {
                    let close_pressed_relay = widget.close_pressed_relay.clone();
                    move || close_pressed_relay.send(())
                })),
        )
        .child(
            El::new()
                .s(Align::new().center_x())
                .s(Padding::new().top(8))
                .s(Font::new().size(28).weight(FontWeight::Bold).color_signal(
                    widget.panel.signal_ref(|panel| match panel.phase {
                        TimerPhase::Expired => "#c62828",
                        TimerPhase::Configured | TimerPhase::Running => "#333333",
                    }),
                ))
                .child(Text::with_signal(
                    widget.panel.signal_ref(|panel| panel.display.clone()),
                )),
        )
}

fn time_field(field: Atom<String>, label: &'static str) -> impl Element {
    let initial = field.get_cloned();
    TextInput::new()
        .s(Width::exact(48))
        .s(Padding::all(4))
        .s(Borders::all(Border::new().width(1).color("#999999")))
        .input_type(InputType::number())
        .label_hidden(label)
        .placeholder(Placeholder::new(label))
        .text(initial)
        .on_change(move |text| field.set(text))
        .update_raw_el(shield_from_drag)
}

fn timer_button(label: &'static str, on_press: impl FnMut() + 'static) -> impl Element {
    Button::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all(4))
        .s(Background::new().color("#8b5a2b"))
        .s(Font::new().color("#ffffff"))
        .label(label)
        .on_press(on_press)
        .update_raw_el(shield_from_drag)
}
