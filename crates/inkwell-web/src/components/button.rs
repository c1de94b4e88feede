use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(
  Clone, Copy, PartialEq, Eq, Default,
)]
pub enum ButtonVariant {
  #[default]
  Plain,
  Primary,
  Danger
}

impl ButtonVariant {
  fn class(self) -> Option<&'static str> {
    match self {
      | ButtonVariant::Plain => None,
      | ButtonVariant::Primary => Some("ok"),
      | ButtonVariant::Danger => Some("danger")
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
  pub label:    AttrValue,
  pub onclick:  Callback<MouseEvent>,
  #[prop_or_default]
  pub variant:  ButtonVariant,
  #[prop_or_default]
  pub disabled: bool
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
  html! {
      <button
          type="button"
          class={classes!("btn", props.variant.class())}
          onclick={props.onclick.clone()}
          disabled={props.disabled}
      >
          { props.label.clone() }
      </button>
  }
}
