//! SVG elements.
//!
//! Every type here also implements [`SvgAttributes`] for the
//! presentation attributes (`fill`, `stroke`, `transform`, ...). Geometry such as `x` or
//! `width` is kept as text so lengths, percentages and units pass through untouched.

attribute_trait! {
    /// Presentation attributes shared by every SVG element.
    ///
    /// Values are plain text, so `fill("url(#grad)")` and `stroke_width("2px")` work as-is.
    pub trait SvgAttributes for opt_in {
        clip_path("clip-path"): String,
        clip_rule("clip-rule"): FillRule,
        color: String,
        color_interpolation("color-interpolation"): String,
        cursor: String,
        display: String,
        dominant_baseline("dominant-baseline"): String,
        fill: String,
        fill_opacity("fill-opacity"): f64,
        fill_rule("fill-rule"): FillRule,
        filter: String,
        flood_color("flood-color"): String,
        flood_opacity("flood-opacity"): f64,
        font_family("font-family"): String,
        font_size("font-size"): String,
        font_style("font-style"): String,
        font_weight("font-weight"): String,
        lighting_color("lighting-color"): String,
        marker_start("marker-start"): String,
        marker_mid("marker-mid"): String,
        marker_end("marker-end"): String,
        mask: String,
        opacity: f64,
        overflow: String,
        paint_order("paint-order"): String,
        pointer_events("pointer-events"): String,
        shape_rendering("shape-rendering"): String,
        stop_color("stop-color"): String,
        stop_opacity("stop-opacity"): f64,
        stroke: String,
        stroke_dasharray("stroke-dasharray"): String,
        stroke_dashoffset("stroke-dashoffset"): String,
        stroke_linecap("stroke-linecap"): StrokeLinecap,
        stroke_linejoin("stroke-linejoin"): StrokeLinejoin,
        stroke_miterlimit("stroke-miterlimit"): f64,
        stroke_opacity("stroke-opacity"): f64,
        stroke_width("stroke-width"): String,
        text_anchor("text-anchor"): TextAnchor,
        text_decoration("text-decoration"): String,
        text_rendering("text-rendering"): String,
        transform: String,
        transform_origin("transform-origin"): String,
        vector_effect("vector-effect"): String,
        visibility: Visibility,
    }
}

elements! {
    traits: [SvgAttributes];

    // Document structure

    /// Build a
    /// [`<svg>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/svg)
    /// element
    svg(SvgSvg) "svg" {
        x: String,
        y: String,
        width: String,
        height: String,
        view_box("viewBox"): String,
        preserve_aspect_ratio("preserveAspectRatio"): String,
        xmlns: String,
        xmlns_xlink("xmlns:xlink"): String,
    };

    /// Build a
    /// [`<defs>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/defs)
    /// element
    defs(SvgDefs) "defs" {};

    /// Build a
    /// [`<desc>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/desc)
    /// element
    desc(SvgDesc) "desc" {};

    /// Build a
    /// [`<g>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/g)
    /// element
    g(SvgG) "g" {};

    /// Build a
    /// [`<metadata>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/metadata)
    /// element
    metadata(SvgMetadata) "metadata" {};

    /// Build a
    /// [`<switch>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/switch)
    /// element
    switch(SvgSwitch) "switch" {};

    /// Build a
    /// [`<symbol>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/symbol)
    /// element
    symbol(SvgSymbol) "symbol" {
        x: String,
        y: String,
        width: String,
        height: String,
        view_box("viewBox"): String,
        preserve_aspect_ratio("preserveAspectRatio"): String,
        ref_x("refX"): String,
        ref_y("refY"): String,
    };

    /// Build a
    /// [`<title>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/title)
    /// element
    title(SvgTitle) "title" {};

    /// Build a
    /// [`<use>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/use)
    /// element
    r#use(SvgUse) "use" {
        href: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<view>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/view)
    /// element
    view(SvgView) "view" {
        view_box("viewBox"): String,
        preserve_aspect_ratio("preserveAspectRatio"): String,
    };

    // Shapes

    /// Build a
    /// [`<circle>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/circle)
    /// element
    circle(SvgCircle) "circle" {
        cx: String,
        cy: String,
        r: String,
        path_length("pathLength"): f64,
    };

    /// Build a
    /// [`<ellipse>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/ellipse)
    /// element
    ellipse(SvgEllipse) "ellipse" {
        cx: String,
        cy: String,
        rx: String,
        ry: String,
        path_length("pathLength"): f64,
    };

    /// Build a
    /// [`<line>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/line)
    /// element
    line(SvgLine) "line" {
        x1: String,
        y1: String,
        x2: String,
        y2: String,
        path_length("pathLength"): f64,
    };

    /// Build a
    /// [`<path>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/path)
    /// element
    path(SvgPath) "path" {
        d: String,
        path_length("pathLength"): f64,
    };

    /// Build a
    /// [`<polygon>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/polygon)
    /// element
    polygon(SvgPolygon) "polygon" {
        points: String,
        path_length("pathLength"): f64,
    };

    /// Build a
    /// [`<polyline>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/polyline)
    /// element
    polyline(SvgPolyline) "polyline" {
        points: String,
        path_length("pathLength"): f64,
    };

    /// Build a
    /// [`<rect>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/rect)
    /// element
    rect(SvgRect) "rect" {
        x: String,
        y: String,
        width: String,
        height: String,
        rx: String,
        ry: String,
        path_length("pathLength"): f64,
    };

    // Text

    /// Build a
    /// [`<text>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/text)
    /// element
    text(SvgText) "text" {
        x: String,
        y: String,
        dx: String,
        dy: String,
        rotate: String,
        length_adjust("lengthAdjust"): LengthAdjust,
        text_length("textLength"): String,
    };

    /// Build a
    /// [`<textPath>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/textPath)
    /// element
    text_path(SvgTextPath) "textPath" {
        href: String,
        length_adjust("lengthAdjust"): LengthAdjust,
        method: String,
        path: String,
        side: String,
        spacing: String,
        start_offset("startOffset"): String,
        text_length("textLength"): String,
    };

    /// Build a
    /// [`<tspan>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/tspan)
    /// element
    tspan(SvgTspan) "tspan" {
        x: String,
        y: String,
        dx: String,
        dy: String,
        rotate: String,
        length_adjust("lengthAdjust"): LengthAdjust,
        text_length("textLength"): String,
    };

    // Links, media and embedding

    /// Build a
    /// [`<a>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/a)
    /// element
    a(SvgA) "a" {
        href: String,
        target: Target,
        download: String,
        hreflang: String,
        ping: SpacedList,
        referrerpolicy: ReferrerPolicy,
        rel: SpacedList,
        r#type("type"): String,
    };

    /// Build a
    /// [`<foreignObject>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/foreignObject)
    /// element
    foreign_object(SvgForeignObject) "foreignObject" {
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<image>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/image)
    /// element
    image(SvgImage) "image" {
        href: String,
        x: String,
        y: String,
        width: String,
        height: String,
        preserve_aspect_ratio("preserveAspectRatio"): String,
        crossorigin: CrossOrigin,
        decoding: Decoding,
    };

    /// Build a
    /// [`<script>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/script)
    /// element
    script(SvgScript) "script" {
        r#type("type"): String,
        href: String,
        crossorigin: CrossOrigin,
    };

    /// Build a
    /// [`<style>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/style)
    /// element
    style(SvgStyle) "style" {
        r#type("type"): String,
        media: String,
    };

    // Paint servers

    /// Build a
    /// [`<linearGradient>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/linearGradient)
    /// element
    linear_gradient(SvgLinearGradient) "linearGradient" {
        x1: String,
        y1: String,
        x2: String,
        y2: String,
        gradient_units("gradientUnits"): Units,
        gradient_transform("gradientTransform"): String,
        href: String,
        spread_method("spreadMethod"): SpreadMethod,
    };

    /// Build a
    /// [`<radialGradient>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/radialGradient)
    /// element
    radial_gradient(SvgRadialGradient) "radialGradient" {
        cx: String,
        cy: String,
        r: String,
        fx: String,
        fy: String,
        fr: String,
        gradient_units("gradientUnits"): Units,
        gradient_transform("gradientTransform"): String,
        href: String,
        spread_method("spreadMethod"): SpreadMethod,
    };

    /// Build a
    /// [`<pattern>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/pattern)
    /// element
    pattern(SvgPattern) "pattern" {
        x: String,
        y: String,
        width: String,
        height: String,
        pattern_units("patternUnits"): Units,
        pattern_content_units("patternContentUnits"): Units,
        pattern_transform("patternTransform"): String,
        href: String,
        view_box("viewBox"): String,
        preserve_aspect_ratio("preserveAspectRatio"): String,
    };

    /// Build a
    /// [`<stop>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/stop)
    /// element
    stop(SvgStop) "stop" {
        offset: String,
    };

    // Clipping, masking and markers

    /// Build a
    /// [`<clipPath>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/clipPath)
    /// element
    clip_path(SvgClipPath) "clipPath" {
        clip_path_units("clipPathUnits"): Units,
    };

    /// Build a
    /// [`<mask>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/mask)
    /// element
    mask(SvgMask) "mask" {
        x: String,
        y: String,
        width: String,
        height: String,
        mask_units("maskUnits"): Units,
        mask_content_units("maskContentUnits"): Units,
    };

    /// Build a
    /// [`<marker>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/marker)
    /// element
    marker(SvgMarker) "marker" {
        marker_width("markerWidth"): String,
        marker_height("markerHeight"): String,
        marker_units("markerUnits"): MarkerUnits,
        orient: String,
        ref_x("refX"): String,
        ref_y("refY"): String,
        view_box("viewBox"): String,
        preserve_aspect_ratio("preserveAspectRatio"): String,
    };

    // Animation

    /// Build a
    /// [`<animate>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animate)
    /// element
    animate(SvgAnimate) "animate" {
        attribute_name("attributeName"): String,
        from: String,
        to: String,
        by: String,
        values: String,
        begin: String,
        dur: String,
        end: String,
        repeat_count("repeatCount"): String,
        repeat_dur("repeatDur"): String,
        fill: AnimationFill,
        calc_mode("calcMode"): CalcMode,
        key_times("keyTimes"): String,
        key_splines("keySplines"): String,
        additive: Additive,
        accumulate: Accumulate,
        restart: AnimationRestart,
        href: String,
    };

    /// Build a
    /// [`<animateMotion>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animateMotion)
    /// element
    animate_motion(SvgAnimateMotion) "animateMotion" {
        path: String,
        key_points("keyPoints"): String,
        rotate: String,
        from: String,
        to: String,
        by: String,
        values: String,
        begin: String,
        dur: String,
        end: String,
        repeat_count("repeatCount"): String,
        fill: AnimationFill,
        calc_mode("calcMode"): CalcMode,
    };

    /// Build a
    /// [`<animateTransform>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/animateTransform)
    /// element
    animate_transform(SvgAnimateTransform) "animateTransform" {
        attribute_name("attributeName"): String,
        r#type("type"): TransformType,
        from: String,
        to: String,
        by: String,
        values: String,
        begin: String,
        dur: String,
        end: String,
        repeat_count("repeatCount"): String,
        fill: AnimationFill,
        additive: Additive,
        accumulate: Accumulate,
    };

    /// Build a
    /// [`<mpath>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/mpath)
    /// element
    mpath(SvgMpath) "mpath" {
        href: String,
    };

    /// Build a
    /// [`<set>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/set)
    /// element
    set(SvgSet) "set" {
        attribute_name("attributeName"): String,
        to: String,
        begin: String,
        dur: String,
        end: String,
        repeat_count("repeatCount"): String,
        fill: AnimationFill,
    };

    // Filter effects

    /// Build a
    /// [`<filter>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/filter)
    /// element
    filter(SvgFilter) "filter" {
        x: String,
        y: String,
        width: String,
        height: String,
        filter_units("filterUnits"): Units,
        primitive_units("primitiveUnits"): Units,
    };

    /// Build a
    /// [`<feBlend>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feBlend)
    /// element
    fe_blend(SvgFeBlend) "feBlend" {
        input("in"): String,
        in2: String,
        mode: BlendMode,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feColorMatrix>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feColorMatrix)
    /// element
    fe_color_matrix(SvgFeColorMatrix) "feColorMatrix" {
        input("in"): String,
        r#type("type"): ColorMatrixType,
        values: String,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feComponentTransfer>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feComponentTransfer)
    /// element
    fe_component_transfer(SvgFeComponentTransfer) "feComponentTransfer" {
        input("in"): String,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feComposite>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feComposite)
    /// element
    fe_composite(SvgFeComposite) "feComposite" {
        input("in"): String,
        in2: String,
        operator: CompositeOperator,
        k1: f64,
        k2: f64,
        k3: f64,
        k4: f64,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feConvolveMatrix>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feConvolveMatrix)
    /// element
    fe_convolve_matrix(SvgFeConvolveMatrix) "feConvolveMatrix" {
        input("in"): String,
        order: String,
        kernel_matrix("kernelMatrix"): String,
        divisor: f64,
        bias: f64,
        target_x("targetX"): i64,
        target_y("targetY"): i64,
        edge_mode("edgeMode"): EdgeMode,
        preserve_alpha("preserveAlpha"): bool,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feDiffuseLighting>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feDiffuseLighting)
    /// element
    fe_diffuse_lighting(SvgFeDiffuseLighting) "feDiffuseLighting" {
        input("in"): String,
        surface_scale("surfaceScale"): f64,
        diffuse_constant("diffuseConstant"): f64,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feDisplacementMap>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feDisplacementMap)
    /// element
    fe_displacement_map(SvgFeDisplacementMap) "feDisplacementMap" {
        input("in"): String,
        in2: String,
        scale: f64,
        x_channel_selector("xChannelSelector"): ChannelSelector,
        y_channel_selector("yChannelSelector"): ChannelSelector,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feDistantLight>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feDistantLight)
    /// element
    fe_distant_light(SvgFeDistantLight) "feDistantLight" {
        azimuth: f64,
        elevation: f64,
    };

    /// Build a
    /// [`<feDropShadow>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feDropShadow)
    /// element
    fe_drop_shadow(SvgFeDropShadow) "feDropShadow" {
        input("in"): String,
        dx: String,
        dy: String,
        std_deviation("stdDeviation"): String,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feFlood>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFlood)
    /// element
    fe_flood(SvgFeFlood) "feFlood" {
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feFuncA>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFuncA)
    /// element
    fe_func_a(SvgFeFuncA) "feFuncA" {
        r#type("type"): TransferFunctionType,
        table_values("tableValues"): String,
        slope: f64,
        intercept: f64,
        amplitude: f64,
        exponent: f64,
        offset: f64,
    };

    /// Build a
    /// [`<feFuncB>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFuncB)
    /// element
    fe_func_b(SvgFeFuncB) "feFuncB" {
        r#type("type"): TransferFunctionType,
        table_values("tableValues"): String,
        slope: f64,
        intercept: f64,
        amplitude: f64,
        exponent: f64,
        offset: f64,
    };

    /// Build a
    /// [`<feFuncG>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFuncG)
    /// element
    fe_func_g(SvgFeFuncG) "feFuncG" {
        r#type("type"): TransferFunctionType,
        table_values("tableValues"): String,
        slope: f64,
        intercept: f64,
        amplitude: f64,
        exponent: f64,
        offset: f64,
    };

    /// Build a
    /// [`<feFuncR>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feFuncR)
    /// element
    fe_func_r(SvgFeFuncR) "feFuncR" {
        r#type("type"): TransferFunctionType,
        table_values("tableValues"): String,
        slope: f64,
        intercept: f64,
        amplitude: f64,
        exponent: f64,
        offset: f64,
    };

    /// Build a
    /// [`<feGaussianBlur>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feGaussianBlur)
    /// element
    fe_gaussian_blur(SvgFeGaussianBlur) "feGaussianBlur" {
        input("in"): String,
        std_deviation("stdDeviation"): String,
        edge_mode("edgeMode"): EdgeMode,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feImage>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feImage)
    /// element
    fe_image(SvgFeImage) "feImage" {
        href: String,
        preserve_aspect_ratio("preserveAspectRatio"): String,
        crossorigin: CrossOrigin,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feMerge>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feMerge)
    /// element
    fe_merge(SvgFeMerge) "feMerge" {
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feMergeNode>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feMergeNode)
    /// element
    fe_merge_node(SvgFeMergeNode) "feMergeNode" {
        input("in"): String,
    };

    /// Build a
    /// [`<feMorphology>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feMorphology)
    /// element
    fe_morphology(SvgFeMorphology) "feMorphology" {
        input("in"): String,
        operator: MorphologyOperator,
        radius: String,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feOffset>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feOffset)
    /// element
    fe_offset(SvgFeOffset) "feOffset" {
        input("in"): String,
        dx: String,
        dy: String,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<fePointLight>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/fePointLight)
    /// element
    fe_point_light(SvgFePointLight) "fePointLight" {
        x: String,
        y: String,
        z: String,
    };

    /// Build a
    /// [`<feSpecularLighting>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feSpecularLighting)
    /// element
    fe_specular_lighting(SvgFeSpecularLighting) "feSpecularLighting" {
        input("in"): String,
        surface_scale("surfaceScale"): f64,
        specular_constant("specularConstant"): f64,
        specular_exponent("specularExponent"): f64,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feSpotLight>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feSpotLight)
    /// element
    fe_spot_light(SvgFeSpotLight) "feSpotLight" {
        x: String,
        y: String,
        z: String,
        points_at_x("pointsAtX"): String,
        points_at_y("pointsAtY"): String,
        points_at_z("pointsAtZ"): String,
        specular_exponent("specularExponent"): f64,
        limiting_cone_angle("limitingConeAngle"): f64,
    };

    /// Build a
    /// [`<feTile>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feTile)
    /// element
    fe_tile(SvgFeTile) "feTile" {
        input("in"): String,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };

    /// Build a
    /// [`<feTurbulence>`](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/feTurbulence)
    /// element
    fe_turbulence(SvgFeTurbulence) "feTurbulence" {
        base_frequency("baseFrequency"): String,
        num_octaves("numOctaves"): i64,
        seed: f64,
        stitch_tiles("stitchTiles"): StitchTiles,
        r#type("type"): TurbulenceType,
        result: String,
        x: String,
        y: String,
        width: String,
        height: String,
    };
}
