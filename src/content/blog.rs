// Blog posts
// Bodies are markdown, rendered by ArticleContent

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub published: &'static str,
    pub cover: &'static str,
    pub body: &'static str,
}

pub const DEGAUSSING_RISKS: BlogPost = BlogPost {
    slug: "degaussing-risks",
    title: "The Hidden Risks of Degaussing: Why It Is Not Enough for Modern Storage",
    author: "D-Secure Research Team",
    published: "2025-03-12",
    cover: "/images/blog/degaussing-risks.webp",
    body: r#"Degaussing has long been treated as the gold standard for destroying data on magnetic media. Expose a drive to a strong enough magnetic field and the data is gone. For many organisations that assumption no longer holds.

## What is degaussing? {#what-is-degaussing}

A degausser generates a powerful magnetic field that scrambles the magnetic domains on a platter or tape. When it works, the stored bits are unreadable and the drive is permanently unusable, because the servo tracks the heads rely on are erased as well.

## Risk 1: It does nothing to SSDs {#ssds}

Solid state drives, USB sticks and memory cards store data as electrical charge in NAND cells. A magnetic field has no effect on them. Running an SSD through a degausser produces a false sense of security and a drive that still holds every byte.

## Risk 2: Coercivity keeps rising {#coercivity}

Modern high-density hard drives use media with higher coercivity. A degausser rated for older drives may not generate a strong enough field, and a partially degaussed drive can still yield data in a lab.

## Risk 3: There is no verification {#verification}

After degaussing the drive cannot be read, which also means nobody can verify that the data is gone. Auditors increasingly ask for proof, and a destroyed drive cannot provide it.

## Risk 4: Cost and waste {#cost}

Degaussed drives cannot be reused or resold. For large fleets the hardware loss and the e-waste add up quickly.

## A better approach {#better-approach}

Software-based erasure following [NIST SP 800-88](https://csrc.nist.gov/pubs/sp/800/88/r1/final) overwrites or cryptographically erases every addressable location, verifies the result and produces a certificate for each device. It works on HDDs and SSDs alike, and the hardware stays usable.

| Method | HDD | SSD | Verifiable | Drive reusable |
|--------|-----|-----|------------|----------------|
| Degaussing | Yes | No | No | No |
| Physical shredding | Yes | Yes | No | No |
| Certified software erasure | Yes | Yes | Yes | Yes |

> Choose the method that matches the media and that leaves you with evidence.

D-Secure erasure products generate tamper-proof reports for every erased drive and file, so compliance does not depend on trust.
"#,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::markdown::{reading_time_minutes, render_markdown};

    #[test]
    fn test_degaussing_post_renders() {
        let html = render_markdown(DEGAUSSING_RISKS.body);
        assert!(html.contains("id=\"ssds\""));
        assert!(html.contains("<table>"));
        assert!(html.contains("<blockquote>"));
        assert!(reading_time_minutes(DEGAUSSING_RISKS.body) >= 2);
    }
}
