//! Attributes every element type accepts.

attribute_trait! {
    /// Attributes shared by all HTML, SVG and MathML elements.
    ///
    /// ```rust
    /// use ztml_html::prelude::*;
    ///
    /// let el = html::span().id("badge").class(["pill", "pill-ok"]).style("color", "green");
    /// assert_eq!(
    ///     el.render(),
    ///     r#"<span id="badge" class="pill pill-ok" style="color:green"></span>"#
    /// );
    /// ```
    pub trait GlobalAttributes for all {
        accesskey: String,
        autocapitalize: String,
        autofocus: bool,
        class: SpacedList,
        contenteditable: ContentEditable,
        dir: Dir,
        draggable: bool,
        enterkeyhint: EnterKeyHint,
        hidden: String,
        id: String,
        inert: bool,
        inputmode: InputMode,
        is: String,
        itemid: String,
        itemprop: SpacedList,
        itemref: SpacedList,
        itemscope: bool,
        itemtype: SpacedList,
        lang: String,
        nonce: String,
        part: SpacedList,
        popover: String,
        role: String,
        slot: String,
        spellcheck: bool,
        style: Style,
        tabindex: i64,
        title: String,
        translate: YesNo,
    }
}

attribute_trait! {
    /// The `z-*` request and templating hooks.
    ///
    /// These are opaque to this crate: they are stored and rendered like any other string
    /// attribute and interpreted by the client-side runtime.
    pub trait ZAttributes for all {
        z_req("z-req"): String,
        z_target("z-target"): String,
        z_req_selector("z-req-selector"): String,
        z_swap("z-swap"): String,
        z_swap_push("z-swap-push"): String,
        z_trigger("z-trigger"): String,
        z_req_method("z-req-method"): ZReqMethod,
        z_req_strategy("z-req-strategy"): String,
        z_req_history("z-req-history"): String,
        z_data("z-data"): String,
        z_json("z-json"): String,
        z_req_batch("z-req-batch"): String,
        z_action("z-action"): String,
        z_req_before("z-req-before"): String,
        z_req_after("z-req-after"): String,
    }
}
