//! Type definitions known to the analyzer.

use phf::phf_set;

use crate::types::TypeValue;

/// Lookup of named types in the loaded definitions.
pub trait TypeDefinitions {
    fn has_type(&self, name: &str) -> bool;
}

/// Element interfaces of the browser definitions.
static HTML_ELEMENT_INTERFACES: phf::Set<&'static str> = phf_set! {
    "HTMLElement",
    "HTMLAnchorElement",
    "HTMLAreaElement",
    "HTMLAudioElement",
    "HTMLBRElement",
    "HTMLBaseElement",
    "HTMLBodyElement",
    "HTMLButtonElement",
    "HTMLCanvasElement",
    "HTMLDListElement",
    "HTMLDataElement",
    "HTMLDataListElement",
    "HTMLDetailsElement",
    "HTMLDialogElement",
    "HTMLDivElement",
    "HTMLEmbedElement",
    "HTMLFieldSetElement",
    "HTMLFormElement",
    "HTMLFrameSetElement",
    "HTMLHRElement",
    "HTMLHeadElement",
    "HTMLHeadingElement",
    "HTMLHtmlElement",
    "HTMLIFrameElement",
    "HTMLImageElement",
    "HTMLInputElement",
    "HTMLLIElement",
    "HTMLLabelElement",
    "HTMLLegendElement",
    "HTMLLinkElement",
    "HTMLMapElement",
    "HTMLMediaElement",
    "HTMLMetaElement",
    "HTMLMeterElement",
    "HTMLModElement",
    "HTMLOListElement",
    "HTMLObjectElement",
    "HTMLOptGroupElement",
    "HTMLOptionElement",
    "HTMLOutputElement",
    "HTMLParagraphElement",
    "HTMLParamElement",
    "HTMLPictureElement",
    "HTMLPreElement",
    "HTMLProgressElement",
    "HTMLQuoteElement",
    "HTMLScriptElement",
    "HTMLSelectElement",
    "HTMLSlotElement",
    "HTMLSourceElement",
    "HTMLSpanElement",
    "HTMLStyleElement",
    "HTMLTableCaptionElement",
    "HTMLTableCellElement",
    "HTMLTableColElement",
    "HTMLTableElement",
    "HTMLTableRowElement",
    "HTMLTableSectionElement",
    "HTMLTemplateElement",
    "HTMLTextAreaElement",
    "HTMLTimeElement",
    "HTMLTitleElement",
    "HTMLTrackElement",
    "HTMLUListElement",
    "HTMLUnknownElement",
    "HTMLVideoElement",
};

/// The `browser` definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDefinitions;

impl TypeDefinitions for BrowserDefinitions {
    #[inline]
    fn has_type(&self, name: &str) -> bool {
        HTML_ELEMENT_INTERFACES.contains(name)
    }
}

/// Conventional interface name of a tag: `div` -> `HTMLDivElement`.
pub fn element_interface_name(tag: &str) -> String {
    let mut chars = tag.chars();
    let mut name = String::with_capacity(tag.len() + 11);
    name.push_str("HTML");
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
    }
    name.push_str(chars.as_str());
    name.push_str("Element");
    name
}

/// Element type for a tag, or the generic fallback when the definitions do
/// not know the derived interface.
pub fn element_type_for_tag(tag: &str, definitions: &dyn TypeDefinitions) -> TypeValue {
    if tag.is_empty() {
        return TypeValue::HTML_ELEMENT;
    }
    let name = element_interface_name(tag);
    if definitions.has_type(&name) {
        TypeValue::element(name)
    } else {
        TypeValue::HTML_ELEMENT
    }
}
