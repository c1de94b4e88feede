use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
  pub message:  AttrValue,
  #[prop_or_default]
  pub children: Html
}

#[function_component(EmptyState)]
pub fn empty_state(
  props: &EmptyStateProps
) -> Html {
  html! {
      <div class="panel empty-state">
          <div style="color:var(--muted);">{ props.message.clone() }</div>
          { props.children.clone() }
      </div>
  }
}
