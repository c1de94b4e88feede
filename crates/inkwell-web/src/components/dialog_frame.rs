use yew::{
  AttrValue,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DialogFrameProps {
  pub title:    AttrValue,
  #[prop_or_default]
  pub small:    bool,
  #[prop_or_default]
  pub children: Html,
  #[prop_or_default]
  pub footer:   Html
}

/// Header, body and footer of a dialog.
/// The backdrop and layering come from
/// the modal host.
#[function_component(DialogFrame)]
pub fn dialog_frame(
  props: &DialogFrameProps
) -> Html {
  html! {
      <div class={classes!("dialog", props.small.then_some("modal-sm"))}>
          <div class="header">{ props.title.clone() }</div>
          <div class="content">{ props.children.clone() }</div>
          <div class="footer">{ props.footer.clone() }</div>
      </div>
  }
}
