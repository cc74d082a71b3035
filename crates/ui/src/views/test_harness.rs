use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use squaring_core::Clock;
use squaring_core::model::{Digit, PracticeSettings, Stage};
use squaring_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::views::PracticeView;
use crate::views::practice::PracticeTestHandles;
use crate::vm::PracticeIntent;

#[derive(Clone)]
struct TestApp {
    settings: PracticeSettings,
}

impl UiApp for TestApp {
    fn settings(&self) -> PracticeSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: PracticeTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { PracticeView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: PracticeTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: PracticeIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn press_digits(&mut self, text: &str) {
        for ch in text.chars() {
            let digit = Digit::try_from(ch).expect("digit");
            self.dispatch(PracticeIntent::Digit(digit));
        }
    }

    pub fn stage(&self) -> Stage {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().stage())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(settings: PracticeSettings) -> ViewHarness {
    let handles = PracticeTestHandles::default();
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewHarnessRoot,
            ViewHarnessProps {
                app: Arc::new(TestApp { settings }),
                handles: handles.clone(),
            },
        ),
        handles,
    };
    harness.rebuild();
    harness
}
