use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Site path of the guide, as registered in the static page registry.
pub const PEPTIDE_GUIDE_PATH: &str = "/pages/peptide-guide";

const NOTICE: &str = "Research peptides are for laboratory use only and not intended for human \
                      consumption or clinical applications.";

pub struct Guide {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const GUIDES: &[Guide] = &[
    Guide {
        title: "Peptides and Amino Acids: A Beginner's Guide",
        description: "The fundamentals of peptide science: the 20 standard amino acids, how peptide \
                      bonds form complex chains, and how peptides differ from proteins.",
        image: "/images/guide-amino-acids.jpg",
    },
    Guide {
        title: "Peptide Synthesis: How Peptides Are Made and Manufactured",
        description: "How peptide synthesis grew from niche laboratory technique into a core \
                      research tool, covering solid-phase (SPPS) and liquid-phase (LPPS) methods.",
        image: "/images/guide-synthesis.jpg",
    },
    Guide {
        title: "Introduction to Peptide Purification Techniques",
        description: "Reversed-phase chromatography, ion exchange, size exclusion and HILIC for \
                      clean, reliable research results.",
        image: "/images/guide-purification.jpg",
    },
    Guide {
        title: "Peptide Quality Control: Methods, Standards and Best Practices",
        description: "Analytical techniques for verifying peptides, including HPLC, mass \
                      spectrometry and NMR.",
        image: "/images/guide-quality-control.jpg",
    },
    Guide {
        title: "The Basics of Peptide Modification: What You Need to Know",
        description: "Modifications that improve stability, solubility and function, from \
                      post-translational changes to PEGylation.",
        image: "/images/guide-modification.jpg",
    },
    Guide {
        title: "Peptide Stability: Guidelines and SOPs for Handling and Storage",
        description: "Storage conditions and handling protocols for lyophilized peptides and \
                      peptides in solution.",
        image: "/images/guide-stability.jpg",
    },
    Guide {
        title: "Peptide Nomenclature: Reference for Naming and Abbreviations",
        description: "IUPAC-IUBMB naming conventions, amino acid codes, sequence notation and \
                      modification symbols.",
        image: "/images/guide-nomenclature.jpg",
    },
    Guide {
        title: "Peptide Glossary: Essential Definitions and Terminology",
        description: "Definitions of the terms used across peptide research, for readers at \
                      every level.",
        image: "/images/guide-glossary.jpg",
    },
];

/// The peptide information guide, the one static page served by this app.
#[component]
pub fn PeptideGuidePage() -> impl IntoView {
    view! {
        <Title text="Peptide Guide | Molecule"/>
        <Meta
            name="description"
            content="Guide to peptides, their uses, storage, handling, and best practices for research applications."
        />
        <div class="min-h-screen bg-white">
            <section class="max-w-7xl mx-auto px-4 py-24">
                <h1 class="text-5xl font-bold text-gray-900 mb-6 leading-tight">
                    "Research Guide: "
                    <span class="text-gray-600">"An Online Reference for Researchers"</span>
                </h1>
                <p class="text-xl text-gray-600 max-w-3xl leading-relaxed">
                    "Technical information and practical guidance to select, handle and work with "
                    "research-grade peptides for in vitro and ex vivo applications."
                </p>
            </section>
            <section class="py-24 bg-gray-50">
                <div class="max-w-7xl mx-auto px-4">
                    <h2 class="text-4xl font-bold text-gray-900 mb-4">"Essential Peptide Research Guides"</h2>
                    <p class="text-lg text-gray-600 mb-16">"Choose Your Focus"</p>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {GUIDES
                            .iter()
                            .map(|guide| view! {
                                <div class="bg-white rounded-2xl overflow-hidden border border-gray-200 hover:border-gray-900 transition-colors">
                                    <img src=guide.image alt=guide.title class="aspect-square w-full object-cover"/>
                                    <div class="p-6">
                                        <h3 class="text-lg font-semibold text-gray-900 mb-3 leading-tight">{guide.title}</h3>
                                        <p class="text-sm text-gray-600 leading-relaxed">{guide.description}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
            <footer class="py-12 bg-gray-50 border-t border-gray-200 text-center">
                <p class="text-sm text-gray-600">{NOTICE}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::pages::PageRegistry;

    #[test]
    fn test_guide_page_is_reachable_from_search() {
        let results = PageRegistry::default().lookup("peptide guide");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].href, PEPTIDE_GUIDE_PATH);
    }

    #[test]
    fn test_guides_are_listed() {
        assert_eq!(GUIDES.len(), 8);
        assert!(GUIDES.iter().all(|g| !g.title.is_empty() && g.image.starts_with("/images/")));
    }
}
