//! Predict Screen - shelf-life prediction form and result card

use makepad_widgets::*;
use shelflife_api::{FoodType, Phase, PredictionForm, PredictionView, StorageType};
use shelflife_ui::ShelfAppData;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

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
    GREEN_500 = vec4(0.133, 0.773, 0.373, 1.0)
    GREEN_700 = vec4(0.043, 0.588, 0.412, 1.0)
    AMBER_500 = vec4(0.961, 0.624, 0.043, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)
    SLATE_300 = vec4(0.796, 0.835, 0.878, 1.0)
    SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    SLATE_700 = vec4(0.204, 0.224, 0.275, 1.0)
    GRAY_100 = vec4(0.953, 0.957, 0.961, 1.0)

    FieldLabel = <Label> {
        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
            }
        }
    }

    /// Styled dropdown for form selects
    FormDropDown = <DropDown> {
        width: 220, height: Fit
        draw_bg: {
            instance dark_mode: 0.0
            border_radius: 4.0
            border_size: 1.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let bg = mix((WHITE), (SLATE_600), self.dark_mode);
                let border = mix((SLATE_300), (SLATE_500), self.dark_mode);
                sdf.fill(bg);
                sdf.stroke(border, self.border_size);
                return sdf.result;
            }
        }
        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }
        popup_menu: {
            draw_bg: {
                instance dark_mode: 0.0
                border_size: 1.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                    let bg = mix((WHITE), (SLATE_700), self.dark_mode);
                    let border = mix((SLATE_300), (SLATE_500), self.dark_mode);
                    sdf.fill(bg);
                    sdf.stroke(border, self.border_size);
                    return sdf.result;
                }
            }
            menu_item: {
                indent_width: 10.0
                padding: {left: 15, top: 8, bottom: 8, right: 15}
                draw_bg: {
                    instance dark_mode: 0.0
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.rect(0., 0., self.rect_size.x, self.rect_size.y);
                        let base = mix((WHITE), (SLATE_700), self.dark_mode);
                        let hover_color = mix((GRAY_100), (SLATE_600), self.dark_mode);
                        sdf.fill(mix(base, hover_color, self.hover));
                        return sdf.result;
                    }
                }
                draw_text: {
                    instance dark_mode: 0.0
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }
        }
    }

    FormInput = <TextInput> {
        width: 220, height: 34
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                sdf.fill(mix((WHITE), (SLATE_600), self.dark_mode));
                sdf.stroke(mix((SLATE_300), (SLATE_500), self.dark_mode), 1.0);
                return sdf.result;
            }
        }
        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }
    }

    PredictButton = <Button> {
        width: 140, height: 38
        text: "Predict"
        draw_text: {
            text_style: { font_size: 13.0 }
            fn get_color(self) -> vec4 {
                return (WHITE);
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance disabled: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 6.0);
                let base = mix((GREEN_500), (GREEN_700), self.hover + self.pressed * 0.5);
                let color = mix(base, (SLATE_500), self.disabled);
                sdf.fill(color);
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
            pressed = {
                default: off,
                off = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {pressed: 0.0} }
                }
                on = {
                    from: {all: Forward {duration: 0.1}}
                    apply: { draw_bg: {pressed: 1.0} }
                }
            }
        }
    }

    FormCard = <View> {
        width: Fit, height: Fit
        flow: Down
        spacing: 12
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

    /// Risk level badge
    RiskBadge = <View> {
        width: Fit, height: Fit
        padding: {left: 10, right: 10, top: 4, bottom: 4}
        show_bg: true
        draw_bg: {
            instance severity: 0.0  // 0=low, 1=medium, 2=high
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 10.0);
                let low = (GREEN_500);
                let medium = (AMBER_500);
                let high = (RED_500);
                let color = mix(
                    mix(low, medium, min(self.severity, 1.0)),
                    high,
                    max(self.severity - 1.0, 0.0)
                );
                sdf.fill(color);
                return sdf.result;
            }
        }

        risk_label = <Label> {
            text: "Low risk"
            draw_text: {
                text_style: { font_size: 11.0 }
                fn get_color(self) -> vec4 {
                    return (WHITE);
                }
            }
        }
    }

    /// Predict screen - form on the left, result card on the right
    pub PredictScreen = {{PredictScreen}} {
        width: Fill, height: Fill
        flow: Right
        spacing: 24
        padding: 24
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((PAGE_BG), (PAGE_BG_DARK), self.dark_mode);
            }
        }

        form_card = <FormCard> {
            title = <Label> {
                text: "Storage Conditions"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 16.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            food_row = <View> {
                width: Fit, height: Fit
                flow: Down
                spacing: 4
                food_label = <FieldLabel> { text: "Food type" }
                food_dropdown = <FormDropDown> {
                    labels: ["Select food type", "Dairy", "Meat", "Vegetables", "Fruits", "Bakery", "Seafood"]
                    values: [none, dairy, meat, vegetables, fruits, bakery, seafood]
                    selected_item: 0
                }
            }

            storage_row = <View> {
                width: Fit, height: Fit
                flow: Down
                spacing: 4
                storage_label = <FieldLabel> { text: "Storage" }
                storage_dropdown = <FormDropDown> {
                    labels: ["Select storage", "Refrigerator", "Freezer", "Pantry"]
                    values: [none, refrigerator, freezer, pantry]
                    selected_item: 0
                }
            }

            temperature_row = <View> {
                width: Fit, height: Fit
                flow: Down
                spacing: 4
                temperature_label = <FieldLabel> { text: "Temperature (C)" }
                temperature_input = <FormInput> { text: "4.0" }
            }

            humidity_row = <View> {
                width: Fit, height: Fit
                flow: Down
                spacing: 4
                humidity_label = <FieldLabel> { text: "Humidity (%)" }
                humidity_input = <FormInput> { text: "60" }
            }

            days_row = <View> {
                width: Fit, height: Fit
                flow: Down
                spacing: 4
                days_label = <FieldLabel> { text: "Days already stored" }
                days_input = <FormInput> { text: "0" }
            }

            predict_btn = <PredictButton> {}

            error_label = <Label> {
                visible: false
                width: 220
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

        result_card = <FormCard> {
            width: Fill
            result_title = <Label> {
                text: "Prediction"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 16.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            status_label = <Label> {
                text: "Fill in the form and press Predict."
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 12.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }

            result_body = <View> {
                visible: false
                width: Fill, height: Fit
                flow: Down
                spacing: 10

                shelf_life_label = <Label> {
                    text: ""
                    draw_text: {
                        instance dark_mode: 0.0
                        text_style: { font_size: 22.0 }
                        fn get_color(self) -> vec4 {
                            return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                        }
                    }
                }

                freshness_label = <Label> {
                    text: ""
                    draw_text: {
                        instance dark_mode: 0.0
                        text_style: { font_size: 13.0 }
                        fn get_color(self) -> vec4 {
                            return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                        }
                    }
                }

                risk_badge = <RiskBadge> {}

                recommendations = <Markdown> {
                    width: Fill, height: Fit
                    font_size: 12.0
                    font_color: (TEXT_SECONDARY)
                    paragraph_spacing: 6
                }
            }
        }
    }
}

/// Map a dropdown index to a food type; index 0 is the placeholder entry
fn food_type_at(index: usize) -> Option<FoodType> {
    index.checked_sub(1).and_then(|i| FoodType::ALL.get(i).copied())
}

/// Map a dropdown index to a storage type; index 0 is the placeholder entry
fn storage_type_at(index: usize) -> Option<StorageType> {
    index.checked_sub(1).and_then(|i| StorageType::ALL.get(i).copied())
}

#[derive(Live, LiveHook, Widget)]
pub struct PredictScreen {
    #[deref]
    view: View,

    /// Poll timer for lifecycle snapshots
    #[rust]
    poll_timer: Timer,

    #[rust]
    initialized: bool,

    /// Last applied dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for PredictScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if !self.initialized {
            self.initialized = true;
            self.poll_timer = cx.start_interval(0.1);
            // Dark mode may already be set from CLI
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                let dark = data.dark_mode_value();
                if dark != self.dark_mode {
                    self.apply_dark_mode(cx, dark);
                }
            }
        }

        if self.poll_timer.is_event(event).is_some() {
            if let Some(data) = scope.data.get::<ShelfAppData>() {
                let dark = data.dark_mode_value();
                if dark != self.dark_mode {
                    self.apply_dark_mode(cx, dark);
                }
                if let Some(view) = data.state().prediction.read_if_dirty() {
                    self.render_prediction(cx, &view);
                }
            }
        }

        if self.view.button(id!(form_card.predict_btn)).clicked(&actions) {
            self.submit_form(cx, scope);
        }

        for action in actions {
            cx.action(action);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl PredictScreen {
    /// Validate the form, surface the first error, or dispatch the request
    fn submit_form(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let food_idx = self.view.drop_down(id!(form_card.food_row.food_dropdown)).selected_item();
        let storage_idx = self.view.drop_down(id!(form_card.storage_row.storage_dropdown)).selected_item();

        let form = PredictionForm {
            food_type: food_type_at(food_idx),
            storage_type: storage_type_at(storage_idx),
            temperature: self.view.text_input(id!(form_card.temperature_row.temperature_input)).text(),
            humidity: self.view.text_input(id!(form_card.humidity_row.humidity_input)).text(),
            days_stored: self.view.text_input(id!(form_card.days_row.days_input)).text(),
        };

        match form.validate() {
            Ok(request) => {
                self.set_error(cx, None);
                if let Some(data) = scope.data.get::<ShelfAppData>() {
                    ::log::info!(
                        "prediction requested: {:?} in {:?}",
                        request.food_type,
                        request.storage_type
                    );
                    data.dispatch_predict(request);
                }
                self.view.label(id!(result_card.status_label)).set_text(cx, "Predicting...");
                self.view.label(id!(result_card.status_label)).set_visible(cx, true);
                self.view.redraw(cx);
            }
            Err(err) => {
                self.set_error(cx, Some(&err.to_string()));
            }
        }
    }

    fn set_error(&mut self, cx: &mut Cx, message: Option<&str>) {
        let label = self.view.label(id!(form_card.error_label));
        match message {
            Some(msg) => {
                label.set_text(cx, msg);
                label.set_visible(cx, true);
            }
            None => {
                label.set_text(cx, "");
                label.set_visible(cx, false);
            }
        }
        self.view.redraw(cx);
    }

    fn render_prediction(&mut self, cx: &mut Cx, view: &PredictionView) {
        let status = self.view.label(id!(result_card.status_label));
        let body = self.view.view(id!(result_card.result_body));

        match view.phase {
            Phase::Idle => {
                status.set_text(cx, "Fill in the form and press Predict.");
                status.set_visible(cx, true);
                body.set_visible(cx, false);
            }
            Phase::Pending => {
                status.set_text(cx, "Predicting...");
                status.set_visible(cx, true);
                body.set_visible(cx, false);
            }
            Phase::Success => {
                if let Some(result) = &view.result {
                    status.set_visible(cx, false);
                    body.set_visible(cx, true);

                    self.view.label(id!(result_card.result_body.shelf_life_label))
                        .set_text(cx, &format!("Estimated shelf life: {}", result.shelf_life_label()));
                    self.view.label(id!(result_card.result_body.freshness_label))
                        .set_text(cx, &format!("Freshness score: {}", result.freshness_label()));

                    self.view.view(id!(result_card.result_body.risk_badge)).apply_over(cx, live!{
                        draw_bg: { severity: (result.risk_level.severity()) }
                    });
                    self.view.label(id!(result_card.result_body.risk_badge.risk_label))
                        .set_text(cx, &format!("{} risk", result.risk_level.label()));

                    let recs = if result.recommendations.is_empty() {
                        String::new()
                    } else {
                        result.recommendations
                            .iter()
                            .map(|r| format!("- {}", r))
                            .collect::<Vec<_>>()
                            .join("\n")
                    };
                    self.view.markdown(id!(result_card.result_body.recommendations)).set_text(cx, &recs);
                }
            }
            Phase::Error => {
                let msg = view.error.as_deref().unwrap_or("Prediction failed");
                status.set_text(cx, &format!("Error: {}", msg));
                status.set_visible(cx, true);
                body.set_visible(cx, false);
            }
        }

        self.view.redraw(cx);
    }

    fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });

        self.view.view(id!(form_card)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.view(id!(result_card)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });

        self.view.label(id!(form_card.title)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(form_card.food_row.food_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(form_card.storage_row.storage_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(form_card.temperature_row.temperature_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(form_card.humidity_row.humidity_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(form_card.days_row.days_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(result_card.result_title)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(result_card.status_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(result_card.result_body.shelf_life_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(result_card.result_body.freshness_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });

        self.view.drop_down(id!(form_card.food_row.food_dropdown)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.drop_down(id!(form_card.storage_row.storage_dropdown)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.text_input(id!(form_card.temperature_row.temperature_input)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.text_input(id!(form_card.humidity_row.humidity_input)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.text_input(id!(form_card.days_row.days_input)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
            draw_text: { dark_mode: (dark_mode) }
        });

        self.view.redraw(cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_index_selects_nothing() {
        assert!(food_type_at(0).is_none());
        assert!(storage_type_at(0).is_none());
    }

    #[test]
    fn test_dropdown_indices_map_to_variants() {
        assert_eq!(food_type_at(1), Some(FoodType::Dairy));
        assert_eq!(food_type_at(FoodType::ALL.len()), Some(FoodType::Seafood));
        assert!(food_type_at(FoodType::ALL.len() + 1).is_none());

        assert_eq!(storage_type_at(2), Some(StorageType::Freezer));
        assert_eq!(storage_type_at(3), Some(StorageType::Pantry));
    }
}
