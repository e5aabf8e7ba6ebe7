//! MathML Core elements.
//!
//! All of them carry [`MathmlAttributes`] next to the global ones.

attribute_trait! {
    /// Attributes shared by every MathML element.
    pub trait MathmlAttributes for opt_in {
        displaystyle: bool,
        mathbackground: String,
        mathcolor: String,
        mathsize: String,
        mathvariant: MathVariant,
        scriptlevel: i64,
    }
}

elements! {
    traits: [MathmlAttributes];

    // Top-level and semantics

    /// Build a
    /// [`<math>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/math)
    /// element
    math(MathmlMath) "math" {
        display: MathDisplay,
        alttext: String,
        xmlns: String,
    };

    /// Build a
    /// [`<semantics>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/semantics)
    /// element
    semantics(MathmlSemantics) "semantics" {};

    /// Build a
    /// [`<annotation>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/annotation)
    /// element
    annotation(MathmlAnnotation) "annotation" {
        encoding: AnnotationEncoding,
        definition_url("definitionURL"): String,
    };

    /// Build a
    /// [`<annotation-xml>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/annotation-xml)
    /// element
    annotation_xml(MathmlAnnotationXml) "annotation-xml" {
        encoding: AnnotationEncoding,
        definition_url("definitionURL"): String,
    };

    // Token elements

    /// Build a
    /// [`<mi>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mi)
    /// element
    mi(MathmlMi) "mi" {};

    /// Build a
    /// [`<mn>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mn)
    /// element
    mn(MathmlMn) "mn" {};

    /// Build a
    /// [`<mo>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mo)
    /// element
    mo(MathmlMo) "mo" {
        accent: bool,
        fence: bool,
        form: OperatorForm,
        largeop: bool,
        lspace: String,
        maxsize: String,
        minsize: String,
        movablelimits: bool,
        rspace: String,
        separator: bool,
        stretchy: bool,
        symmetric: bool,
    };

    /// Build a
    /// [`<ms>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/ms)
    /// element
    ms(MathmlMs) "ms" {};

    /// Build a
    /// [`<mspace>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mspace)
    /// element
    mspace(MathmlMspace) "mspace" {
        width: String,
        height: String,
        depth: String,
    };

    /// Build a
    /// [`<mtext>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mtext)
    /// element
    mtext(MathmlMtext) "mtext" {};

    // General layout

    /// Build a
    /// [`<merror>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/merror)
    /// element
    merror(MathmlMerror) "merror" {};

    /// Build a
    /// [`<mfrac>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mfrac)
    /// element
    mfrac(MathmlMfrac) "mfrac" {
        linethickness: String,
    };

    /// Build a
    /// [`<mpadded>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mpadded)
    /// element
    mpadded(MathmlMpadded) "mpadded" {
        width: String,
        height: String,
        depth: String,
        lspace: String,
        voffset: String,
    };

    /// Build a
    /// [`<mphantom>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mphantom)
    /// element
    mphantom(MathmlMphantom) "mphantom" {};

    /// Build a
    /// [`<mroot>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mroot)
    /// element
    mroot(MathmlMroot) "mroot" {};

    /// Build a
    /// [`<mrow>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mrow)
    /// element
    mrow(MathmlMrow) "mrow" {};

    /// Build a
    /// [`<msqrt>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/msqrt)
    /// element
    msqrt(MathmlMsqrt) "msqrt" {};

    /// Build a
    /// [`<mstyle>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mstyle)
    /// element
    mstyle(MathmlMstyle) "mstyle" {};

    /// Build a
    /// [`<menclose>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/menclose)
    /// element
    menclose(MathmlMenclose) "menclose" {
        notation: SpacedList,
    };

    // Scripts and limits

    /// Build a
    /// [`<mmultiscripts>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mmultiscripts)
    /// element
    mmultiscripts(MathmlMmultiscripts) "mmultiscripts" {};

    /// Build a
    /// [`<mprescripts>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mprescripts)
    /// element
    mprescripts(MathmlMprescripts) "mprescripts" {};

    /// Build a
    /// [`<none>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/none)
    /// element
    none(MathmlNone) "none" {};

    /// Build a
    /// [`<mover>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mover)
    /// element
    mover(MathmlMover) "mover" {
        accent: bool,
    };

    /// Build a
    /// [`<msub>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/msub)
    /// element
    msub(MathmlMsub) "msub" {};

    /// Build a
    /// [`<msubsup>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/msubsup)
    /// element
    msubsup(MathmlMsubsup) "msubsup" {};

    /// Build a
    /// [`<msup>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/msup)
    /// element
    msup(MathmlMsup) "msup" {};

    /// Build a
    /// [`<munder>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/munder)
    /// element
    munder(MathmlMunder) "munder" {
        accentunder: bool,
    };

    /// Build a
    /// [`<munderover>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/munderover)
    /// element
    munderover(MathmlMunderover) "munderover" {
        accent: bool,
        accentunder: bool,
    };

    // Tabular math

    /// Build a
    /// [`<mtable>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mtable)
    /// element
    mtable(MathmlMtable) "mtable" {};

    /// Build a
    /// [`<mtd>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mtd)
    /// element
    mtd(MathmlMtd) "mtd" {
        columnspan: i64,
        rowspan: i64,
    };

    /// Build a
    /// [`<mtr>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/mtr)
    /// element
    mtr(MathmlMtr) "mtr" {};

    // Uncategorized

    /// Build a
    /// [`<maction>`](https://developer.mozilla.org/en-US/docs/Web/MathML/Element/maction)
    /// element
    maction(MathmlMaction) "maction" {
        actiontype: String,
        selection: i64,
    };
}
