//! Voice Screen - record, stop, reset, live level meter, transcript display

use makepad_widgets::*;
use shelflife_api::{VoicePhase, VoiceView};
use shelflife_ui::widgets::LevelMeterWidgetExt;
use shelflife_ui::ShelfAppData;

use crate::capture::AudioCapture;
use crate::wav::encode_wav_mono_16bit;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use shelflife_ui::widgets::level_meter::LevelMeter;

    // Color constants (vec4 to avoid hex parsing issues)
    PAGE_BG = vec4(0.961, 0.969, 0.980, 1.0)
    PAGE_BG_DARK = vec4(0.059, 0.090, 0.165, 1.0)
    CARD_BG = vec4(1.0, 1.0, 1.0, 1.0)
    CARD_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    BORDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)
    RED_500 = vec4(0.937, 0.267, 0.267, 1.0)
    RED_700 = vec4(0.726, 0.149, 0.149, 1.0)
    GREEN_500 = vec4(0.133, 0.773, 0.373, 1.0)
    SLATE_400 = vec4(0.580, 0.639, 0.702, 1.0)
    SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    VoiceButton = <Button> {
        width: 110, height: 38
        draw_text: {
            text_style: { font_size: 13.0 }
            fn get_color(self) -> vec4 {
                return (WHITE);
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance color_r: 0.133
            instance color_g: 0.773
            instance color_b: 0.373
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 6.0);
                let base = vec4(self.color_r, self.color_g, self.color_b, 1.0);
                let shade = 1.0 - 0.15 * (self.hover + self.pressed);
                sdf.fill(vec4(base.xyz * shade, 1.0));
                return sdf.result;
            }
        }
        animator: {
            hover = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.15}}
                    apply: { draw_bg: {hover: 1.0} }
                }
            }
        }
    }

    VoiceCard = <View> {
        width: 520, height: Fit
        flow: Down
        spacing: 16
        padding: 24
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 8.0);
                sdf.fill(mix((CARD_BG), (CARD_BG_DARK), self.dark_mode));
                sdf.stroke(mix((BORDER), (BORDER_DARK), self.dark_mode), 1.0);
                return sdf.result;
            }
        }
    }

    /// Voice screen - recording controls and transcript
    pub VoiceScreen = {{VoiceScreen}} {
        width: Fill, height: Fill
        flow: Down
        align: {x: 0.5}
        padding: 32
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((PAGE_BG), (PAGE_BG_DARK), self.dark_mode);
            }
        }

        voice_card = <VoiceCard> {
            title = <Label> {
                text: "Ask by voice"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 16.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            phase_row = <View> {
                width: Fill, height: Fit
                flow: Right
                spacing: 12
                align: {y: 0.5}

                phase_label = <Label> {
                    text: "Idle"
                    draw_text: {
                        instance dark_mode: 0.0
                        text_style: { font_size: 12.0 }
                        fn get_color(self) -> vec4 {
                            return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                        }
                    }
                }

                <Filler> {}

                mic_meter = <LevelMeter> {}
            }

            button_row = <View> {
                width: Fill, height: Fit
                flow: Right
                spacing: 12

                record_btn = <VoiceButton> {
                    text: "Record"
                }
                stop_btn = <VoiceButton> {
                    text: "Stop"
                    draw_bg: { color_r: 0.937, color_g: 0.267, color_b: 0.267 }
                }
                reset_btn = <VoiceButton> {
                    text: "Reset"
                    draw_bg: { color_r: 0.392, color_g: 0.455, color_b: 0.545 }
                }
            }

            transcript_title = <Label> {
                text: "Transcript"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 12.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }

            transcript_label = <Label> {
                width: Fill
                text: "Press Record and ask your question."
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 13.0 }
                    wrap: Word
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            error_label = <Label> {
                visible: false
                width: Fill
                text: ""
                draw_text: {
                    text_style: { font_size: 11.0 }
                    wrap: Word
                    fn get_color(self) -> vec4 {
                        return (RED_500);
                    }
                }
            }
        }
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct VoiceScreen {
    #[deref]
    view: View,

    /// Microphone session; lives on the UI thread
    #[rust]
    capture: AudioCapture,

    /// Poll timer for mic level and lifecycle snapshots
    #[rust]
    poll_timer: Timer,

    #[rust]
    initialized: bool,

    /// Last applied dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for VoiceScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if !self.initialized {
            self.initialized = true;
            self.poll_timer = cx.start_interval(0.05);
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                let dark = data.dark_mode_value();
                if dark != self.dark_mode {
                    self.apply_dark_mode(cx, dark);
                }
            }
        }

        if self.poll_timer.is_event(event).is_some() {
            if self.capture.is_recording() {
                let level = self.capture.level();
                self.view.level_meter(id!(voice_card.phase_row.mic_meter)).set_level(cx, level);
            }
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                let dark = data.dark_mode_value();
                if dark != self.dark_mode {
                    self.apply_dark_mode(cx, dark);
                }
                if let Some(view) = data.state().voice.read_if_dirty() {
                    self.render_voice(cx, &view);
                }
            }
        }

        if self.view.button(id!(voice_card.button_row.record_btn)).clicked(&actions) {
            self.start_recording(cx, scope);
        }
        if self.view.button(id!(voice_card.button_row.stop_btn)).clicked(&actions) {
            self.stop_recording(scope);
        }
        if self.view.button(id!(voice_card.button_row.reset_btn)).clicked(&actions) {
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                // Keeps an active recording running; clears outputs and any
                // samples buffered so far so they cannot leak into the next stop
                data.state().voice.reset();
            }
            self.capture.clear_buffer();
        }

        for action in actions {
            cx.action(action);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl VoiceScreen {
    fn start_recording(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let Some(data) = scope.data.get::<ShelfAppData>() else {
            return;
        };
        // Only one session at a time; ignored while recording or processing
        if !data.state().voice.begin_recording() {
            return;
        }
        if let Err(err) = self.capture.start() {
            ::log::error!("mic capture failed: {}", err);
            data.state().voice.fail_capture(err);
            return;
        }
        self.view.level_meter(id!(voice_card.phase_row.mic_meter)).set_level(cx, 0.0);
    }

    fn stop_recording(&mut self, scope: &mut Scope) {
        // Stop without an active recording is a no-op
        if !self.capture.is_recording() {
            return;
        }
        let (samples, sample_rate) = self.capture.stop();
        ::log::info!(
            "captured {:.1}s of audio at {} Hz",
            samples.len() as f64 / sample_rate.max(1) as f64,
            sample_rate
        );
        if let Some(data) = scope.data.get::<ShelfAppData>() {
            let wav = encode_wav_mono_16bit(&samples, sample_rate);
            data.dispatch_transcribe(wav);
        }
    }

    fn render_voice(&mut self, cx: &mut Cx, view: &VoiceView) {
        let phase_text = match view.phase {
            VoicePhase::Idle => "Idle",
            VoicePhase::Recording => "Recording...",
            VoicePhase::Processing => "Transcribing...",
        };
        self.view.label(id!(voice_card.phase_row.phase_label)).set_text(cx, phase_text);

        if view.phase == VoicePhase::Idle && !self.capture.is_recording() {
            self.view.level_meter(id!(voice_card.phase_row.mic_meter)).set_level(cx, 0.0);
        }

        let transcript = self.view.label(id!(voice_card.transcript_label));
        match &view.transcript {
            Some(text) if !text.is_empty() => transcript.set_text(cx, text),
            _ => transcript.set_text(cx, "Press Record and ask your question."),
        }

        let error = self.view.label(id!(voice_card.error_label));
        match &view.error {
            Some(msg) => {
                error.set_text(cx, msg);
                error.set_visible(cx, true);
            }
            None => {
                error.set_text(cx, "");
                error.set_visible(cx, false);
            }
        }

        self.view.redraw(cx);
    }

    fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.view(id!(voice_card)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(voice_card.title)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(voice_card.phase_row.phase_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(voice_card.transcript_title)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(voice_card.transcript_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.level_meter(id!(voice_card.phase_row.mic_meter)).apply_dark_mode(cx, dark_mode);

        self.view.redraw(cx);
    }
}
